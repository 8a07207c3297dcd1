//! Link conversion - parse an inbound link, load it, resolve it elsewhere.

pub mod link;
pub mod redirect;
pub mod service;

pub use link::{InboundLink, parse_entity};
pub use redirect::{HttpRedirectResolver, UrlResolver};
pub use service::{Conversion, ConversionResponse, ConversionResult, ConversionService};
