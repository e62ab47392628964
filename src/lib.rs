// Crate entry point. Re-export modules so tests and binaries can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No connection logic here.
//
// How it is used
// - Binaries call `get_temporal_client` or build a `TemporalClientFactory` over a dialer.
// - Tests import modules from this crate root to reach the code under test.

pub mod shared {
    pub mod env;
}

pub mod core {
    pub mod ports;
    pub mod settings;
}

pub mod application {
    pub mod client_factory;
    pub mod errors;
}

pub mod adapters {
    pub mod grpc {
        pub mod grpc_dialer;
    }
    pub mod in_memory {
        pub mod in_memory_dialer;
    }
}

pub use adapters::grpc::grpc_dialer::TemporalClient;
pub use application::client_factory::{
    TemporalClientFactory, get_temporal_client, get_temporal_client_with_namespace,
};
pub use application::errors::ClientError;
