pub mod in_memory_user_repository;
#[cfg(test)]
pub mod test_support;
pub mod user_repository;
