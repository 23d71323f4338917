pub mod hashtags;
