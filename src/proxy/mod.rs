mod registry_proxy;
pub use registry_proxy::*;
