#![cfg(test)]

use anyhow::Result;
use rdf_interop_model::{BlankNodeScope, SimpleRdf};
use rdf_interop_oxrdf::OxRdf;
use rdf_interop_testsuite::check_testsuite;

#[test]
fn simple_against_simple() -> Result<()> {
    check_testsuite(&SimpleRdf::new(), &SimpleRdf::new(), &[])
}

#[test]
fn oxrdf_against_oxrdf() -> Result<()> {
    check_testsuite(&OxRdf::new(), &OxRdf::new(), &[])
}

#[test]
fn simple_against_oxrdf() -> Result<()> {
    check_testsuite(&SimpleRdf::new(), &OxRdf::new(), &[])
}

#[test]
fn oxrdf_against_simple() -> Result<()> {
    check_testsuite(&OxRdf::new(), &SimpleRdf::new(), &[])
}

#[test]
fn factories_sharing_a_scope() -> Result<()> {
    let scope = BlankNodeScope::new();
    check_testsuite(
        &SimpleRdf::with_scope(scope),
        &OxRdf::with_scope(scope),
        &[],
    )
}
