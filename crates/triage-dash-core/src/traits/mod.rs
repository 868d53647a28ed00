mod clock;
mod data_source;
mod transport;

pub use clock::{FixedClock, IClock, SystemClock};
pub use data_source::IDataSource;
pub use transport::{ITransport, Method, TransportRequest, TransportResponse};
