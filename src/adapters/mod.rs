// UserStore and RemoteApi implementations.

pub mod http;
pub mod storage;
