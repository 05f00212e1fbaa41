//! Baby name analysis module

pub mod trends;

pub use trends::{
    average_name_length_by_year, births_by_sex, most_popular_by_year, name_history, sex_share,
    top_name_shares, unique_names_by_year, NameShare, SexShare, TopNames,
};
