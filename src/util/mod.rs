pub mod ethiopic;

pub use ethiopic::EthiopicDate;
