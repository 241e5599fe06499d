pub mod health;
pub mod plant_care;
pub mod server;
#[cfg(test)]
pub mod test;
