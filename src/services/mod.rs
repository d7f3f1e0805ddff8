pub mod categorization;
