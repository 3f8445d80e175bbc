#![allow(dead_code)]

pub(crate) mod fake_tools;
pub(crate) mod test_context;

pub(crate) use test_context::TestContext;
