pub mod sandalphon {
    pub mod error;
    pub mod macros;
    pub mod name;
    pub mod network;
    pub mod report;
    pub mod scenario;
    pub mod user;
    pub mod utils;
}
