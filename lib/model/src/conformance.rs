//! Checks that a pair of values honours the equality and hashing contract.
//!
//! Backends run these checks in their test suites against values of other implementations. A
//! failing check returns the first [`ContractViolation`] it found, carrying the N-Triples forms of
//! the offending values.

use crate::contract::{blank_node_or_iri_eq, iri_eq, term_eq};
use crate::{
    quads_equal, terms_equal, triples_equal, ContractRule, ContractViolation, RdfQuad, RdfTerm,
    RdfTriple,
};

/// Checks reflexivity, symmetry, hash agreement, accessor stability and N-Triples agreement of two
/// terms.
pub fn check_term_pair<A, B>(a: &A, b: &B) -> Result<(), ContractViolation>
where
    A: RdfTerm + ?Sized,
    B: RdfTerm + ?Sized,
{
    let violation = |rule| ContractViolation {
        rule,
        left: a.ntriples_form(),
        right: b.ntriples_form(),
    };

    if !terms_equal(a, a) || !terms_equal(b, b) {
        return Err(violation(ContractRule::Reflexivity));
    }
    if a.as_term_ref() != a.as_term_ref() || b.as_term_ref() != b.as_term_ref() {
        return Err(violation(ContractRule::StableAccessors));
    }
    let equal = terms_equal(a, b);
    if equal != terms_equal(b, a) {
        return Err(violation(ContractRule::Symmetry));
    }
    if equal {
        if a.contract_hash() != b.contract_hash() {
            return Err(violation(ContractRule::EqualHash));
        }
        if a.ntriples_form() != b.ntriples_form() {
            return Err(violation(ContractRule::NTriplesAgreement));
        }
    }
    Ok(())
}

/// Checks that equality is transitive over three terms.
pub fn check_term_transitivity<A, B, C>(a: &A, b: &B, c: &C) -> Result<(), ContractViolation>
where
    A: RdfTerm + ?Sized,
    B: RdfTerm + ?Sized,
    C: RdfTerm + ?Sized,
{
    if terms_equal(a, b) && terms_equal(b, c) && !terms_equal(a, c) {
        return Err(ContractViolation {
            rule: ContractRule::Transitivity,
            left: a.ntriples_form(),
            right: c.ntriples_form(),
        });
    }
    Ok(())
}

/// Checks the contract for two triples, including that their equality matches the equality of
/// their components.
pub fn check_triple_pair<A, B>(a: &A, b: &B) -> Result<(), ContractViolation>
where
    A: RdfTriple + ?Sized,
    B: RdfTriple + ?Sized,
{
    let violation = |rule| ContractViolation {
        rule,
        left: a.ntriples_form(),
        right: b.ntriples_form(),
    };

    if !triples_equal(a, a) || !triples_equal(b, b) {
        return Err(violation(ContractRule::Reflexivity));
    }
    if a.as_triple_ref() != a.as_triple_ref() || b.as_triple_ref() != b.as_triple_ref() {
        return Err(violation(ContractRule::StableAccessors));
    }
    let equal = triples_equal(a, b);
    if equal != triples_equal(b, a) {
        return Err(violation(ContractRule::Symmetry));
    }

    let (left, right) = (a.as_triple_ref(), b.as_triple_ref());
    let components_equal = blank_node_or_iri_eq(left.subject(), right.subject())
        && iri_eq(left.predicate(), right.predicate())
        && term_eq(left.object(), right.object());
    if equal != components_equal {
        return Err(violation(ContractRule::ComponentEquality));
    }
    if equal {
        if a.contract_hash() != b.contract_hash() {
            return Err(violation(ContractRule::EqualHash));
        }
        if a.ntriples_form() != b.ntriples_form() {
            return Err(violation(ContractRule::NTriplesAgreement));
        }
    }
    Ok(())
}

/// Checks the contract for two quads. The default graph is a value of its own.
pub fn check_quad_pair<A, B>(a: &A, b: &B) -> Result<(), ContractViolation>
where
    A: RdfQuad + ?Sized,
    B: RdfQuad + ?Sized,
{
    let violation = |rule| ContractViolation {
        rule,
        left: a.ntriples_form(),
        right: b.ntriples_form(),
    };

    if !quads_equal(a, a) || !quads_equal(b, b) {
        return Err(violation(ContractRule::Reflexivity));
    }
    if a.as_quad_ref() != a.as_quad_ref() || b.as_quad_ref() != b.as_quad_ref() {
        return Err(violation(ContractRule::StableAccessors));
    }
    let equal = quads_equal(a, b);
    if equal != quads_equal(b, a) {
        return Err(violation(ContractRule::Symmetry));
    }

    let (left, right) = (a.as_quad_ref(), b.as_quad_ref());
    let components_equal = left.as_triple() == right.as_triple()
        && left.graph_name() == right.graph_name();
    if equal != components_equal {
        return Err(violation(ContractRule::ComponentEquality));
    }
    if equal {
        if a.contract_hash() != b.contract_hash() {
            return Err(violation(ContractRule::EqualHash));
        }
        if a.ntriples_form() != b.ntriples_form() {
            return Err(violation(ContractRule::NTriplesAgreement));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        BlankNode, BlankNodeScope, Iri, IriRef, Literal, RdfResult, Term, TermRef, Triple,
    };

    /// Compares like the IRI it holds but ignores the pinned hash.
    struct Liar(Iri);

    impl RdfTerm for Liar {
        fn as_term_ref(&self) -> TermRef<'_> {
            self.0.as_term_ref()
        }

        fn contract_hash(&self) -> u64 {
            0xdead_beef
        }
    }

    #[test]
    fn accepts_model_terms() -> RdfResult<()> {
        let iri = Iri::new("http://example.com/s")?;
        let literal = Literal::new_language_tagged("hi", "EN")?;
        let node = BlankNode::new(BlankNodeScope::new(), "b0");
        assert_eq!(check_term_pair(&iri, &IriRef::new("http://example.com/s")?), Ok(()));
        assert_eq!(check_term_pair(&literal, &Literal::new_language_tagged("hi", "en")?), Ok(()));
        assert_eq!(check_term_pair(&node, &Term::from(node.clone())), Ok(()));
        assert_eq!(check_term_pair(&iri, &literal), Ok(()));
        assert_eq!(check_term_transitivity(&iri, &iri.as_ref(), &Term::from(iri.clone())), Ok(()));
        Ok(())
    }

    #[test]
    fn reports_hash_disagreement() -> RdfResult<()> {
        let iri = Iri::new("http://example.com/s")?;
        let violation = check_term_pair(&iri, &Liar(iri.clone())).err();
        assert_eq!(violation.map(|v| v.rule), Some(ContractRule::EqualHash));
        Ok(())
    }

    #[test]
    fn accepts_model_statements() -> RdfResult<()> {
        let triple = Triple::new(
            Iri::new("http://example.com/s")?,
            Iri::new("http://example.com/p")?,
            Literal::new_simple("o"),
        );
        assert_eq!(check_triple_pair(&triple, &triple.as_ref()), Ok(()));
        let in_default = triple.clone().in_default_graph();
        let in_named = triple.in_graph(Iri::new("http://example.com/g")?);
        assert_eq!(check_quad_pair(&in_default, &in_named), Ok(()));
        assert_eq!(check_quad_pair(&in_default, &in_default.as_ref()), Ok(()));
        Ok(())
    }
}
