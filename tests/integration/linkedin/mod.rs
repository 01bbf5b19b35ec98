//! LinkedIn client tests against wiremock

mod client_test;
