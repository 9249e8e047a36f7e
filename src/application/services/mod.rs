mod operation_client;
mod poll_policy;

pub use operation_client::AsyncOperationClient;
pub use poll_policy::PollPolicy;
