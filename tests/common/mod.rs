#![allow(dead_code)]

pub mod mocks;

use fanout_dns_application::ports::ResolverEndpoint;
use std::net::SocketAddr;

pub fn endpoint(name: &str, last_octet: u8) -> ResolverEndpoint {
    ResolverEndpoint::new(name, SocketAddr::from(([192, 0, 2, last_octet], 53)))
}
