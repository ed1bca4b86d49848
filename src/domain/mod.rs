// Domain layer: the person entity and the fiscal code check. No I/O here.

pub mod fiscal_code;
pub mod person;
