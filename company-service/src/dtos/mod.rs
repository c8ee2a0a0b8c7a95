pub mod companies;

pub use companies::{CompanyQuery, CompanyResponse, CreateCompanyRequest};
