pub mod observatory;
pub mod person;
pub mod row;
pub mod site;

pub use observatory::Observatory;
pub use person::{NewPerson, Person};
pub use row::PersonRow;
pub use site::Site;
