pub mod filtermodel;
pub mod propertymodel;

#[cfg(test)]
pub mod fixtures;
