pub mod event;
pub mod time;

#[cfg(test)]
mod tests;
