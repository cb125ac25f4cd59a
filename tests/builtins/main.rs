mod arithmetic;
mod errors;
mod lists;
mod ordering;
mod proptests;
mod type_tests;
