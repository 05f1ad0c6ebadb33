mod ordering;
mod search;
