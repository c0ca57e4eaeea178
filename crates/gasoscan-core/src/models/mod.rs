pub mod blood_gas;
pub mod diagnosis;
pub mod extraction;
pub mod parameter;
