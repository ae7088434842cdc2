use crate::calculator;
use crate::cli::{BinaryArgs, ResultFormat};
use crate::config::Config;
use crate::error::AppResult;
use crate::output::{self, OperationReport};
use crate::utils;
use anyhow::Result;

/// Binary arithmetic operations exposed on the command line.
#[derive(Clone, Copy)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    pub fn apply(self, a: f64, b: f64) -> AppResult<f64> {
        match self {
            Operation::Add => Ok(calculator::add(a, b)),
            Operation::Subtract => Ok(calculator::subtract(a, b)),
            Operation::Multiply => Ok(utils::multiply(a, b)),
            Operation::Divide => calculator::divide(a, b),
        }
    }
}

pub fn handle_add_command(config: &Config, args: &BinaryArgs) -> Result<()> {
    run_operation(Operation::Add, config, args)
}

pub fn handle_subtract_command(config: &Config, args: &BinaryArgs) -> Result<()> {
    run_operation(Operation::Subtract, config, args)
}

pub fn handle_multiply_command(config: &Config, args: &BinaryArgs) -> Result<()> {
    run_operation(Operation::Multiply, config, args)
}

pub fn handle_divide_command(config: &Config, args: &BinaryArgs) -> Result<()> {
    run_operation(Operation::Divide, config, args)
}

fn run_operation(op: Operation, config: &Config, args: &BinaryArgs) -> Result<()> {
    let result = op.apply(args.a, args.b)?;

    let report = OperationReport {
        operation: op.name().to_string(),
        operands: vec![args.a, args.b],
        result,
    };

    match ResultFormat::resolve(args.format, config) {
        ResultFormat::Plain => output::print_result(&report, config),
        ResultFormat::Json => output::print_result_json(&report)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_apply_operations() {
        assert_eq!(Operation::Add.apply(1.0, 2.0).unwrap(), 3.0);
        assert_eq!(Operation::Subtract.apply(5.0, 3.0).unwrap(), 2.0);
        assert_eq!(Operation::Multiply.apply(4.0, 5.0).unwrap(), 20.0);
        assert_eq!(Operation::Divide.apply(10.0, 2.0).unwrap(), 5.0);
    }

    #[test]
    fn test_apply_divide_by_zero() {
        let err = Operation::Divide.apply(1.0, 0.0).unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }

    #[test]
    fn test_operation_names() {
        assert_eq!(Operation::Add.name(), "add");
        assert_eq!(Operation::Divide.name(), "divide");
    }
}
