pub mod instance;
pub mod setup;

#[cfg(test)]
mod follow;
#[cfg(test)]
mod tweet;
