pub mod intro;
