pub mod fakes;

mod test_calculator;
mod test_claim;
