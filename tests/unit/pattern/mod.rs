mod parameters;
mod strategy;
