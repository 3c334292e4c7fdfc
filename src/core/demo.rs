use crate::core::calculator::ScientificCalculator;
use crate::domain::Operand;
use crate::utils::error::{CalcError, ErrorCategory, Result};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};
use std::io::{BufRead, Write};

/// Fixed demonstration sequence over two operands.
pub struct Demo<'a, W: Write> {
    calc: &'a ScientificCalculator,
    out: W,
}

impl<'a, W: Write> Demo<'a, W> {
    pub fn new(calc: &'a ScientificCalculator, out: W) -> Self {
        Self { calc, out }
    }

    /// Prints every section in order. The last step divides by zero, so a
    /// completed run always ends in a value error; the first failure stops it.
    pub fn run(&mut self, a: &Operand, b: &Operand) -> Result<()> {
        let calc = self.calc;

        writeln!(self.out, "\n=== Basic Operations ===")?;
        let sum = calc.add(a, b)?;
        writeln!(self.out, "Sum of {} + {} = {}", a, b, sum)?;
        let difference = calc.subtract(a, b)?;
        writeln!(self.out, "Difference of {} - {} = {}", a, b, difference)?;
        let product = calc.multiply(a, b)?;
        writeln!(self.out, "Product of {} * {} = {}", a, b, product)?;
        let quotient = calc.divide(a, b)?;
        writeln!(self.out, "Quotient of {} / {} = {}", a, b, quotient)?;

        writeln!(self.out, "\n=== Advanced Operations ===")?;
        let power = calc.power(a, b)?;
        writeln!(self.out, "Power of {} ^ {} = {}", a, b, power)?;
        let root = calc.square_root(a)?;
        writeln!(self.out, "Square root of {} = {}", a, root)?;
        let ln = calc.natural_log(a)?;
        writeln!(self.out, "Natural logarithm of {} = {}", a, ln)?;
        let log10 = calc.log_base_10(a)?;
        writeln!(self.out, "Base-10 logarithm of {} = {}", a, log10)?;

        writeln!(self.out, "\n=== Trigonometric Functions ===")?;
        writeln!(self.out, "Sine of π/2 = {}", calc.sine(FRAC_PI_2)?)?;
        writeln!(self.out, "Cosine of π/2 = {}", calc.cosine(FRAC_PI_2)?)?;
        writeln!(self.out, "Tangent of π/4 = {}", calc.tangent(FRAC_PI_4)?)?;

        writeln!(self.out, "\n=== Error Handling Check ===")?;
        writeln!(self.out, "Attempting to divide by zero:")?;
        self.out.flush()?;
        calc.divide(a, 0)?;

        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Asks for one operand and reads a line of input.
pub fn prompt<R: BufRead, W: Write>(label: &str, input: &mut R, out: &mut W) -> Result<Operand> {
    write!(out, "Enter number {}: ", label)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CalcError::InputClosed);
    }
    Ok(Operand::parse(&line))
}

/// One-line report for a failed run.
pub fn describe_failure(err: &CalcError) -> String {
    let kind = match err.category() {
        ErrorCategory::Type => "Type error",
        ErrorCategory::Value => "Value error",
        ErrorCategory::Unexpected => "Unexpected error",
    };
    format!("{}: {}", kind, err.user_friendly_message())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::logger::LogContext;
    use std::io::Cursor;

    fn run(a: Operand, b: Operand) -> (String, Result<()>) {
        let calc = ScientificCalculator::new(LogContext::silent());
        let mut demo = Demo::new(&calc, Vec::new());
        let result = demo.run(&a, &b);
        (String::from_utf8(demo.into_inner()).unwrap(), result)
    }

    #[test]
    fn test_full_run_ends_with_division_by_zero() {
        let (output, result) = run(Operand::from(8), Operand::from(2));

        let err = result.unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Value);
        assert_eq!(describe_failure(&err), "Value error: Cannot divide 8 by zero");

        assert!(output.contains("Sum of 8 + 2 = 10\n"));
        assert!(output.contains("Quotient of 8 / 2 = 4\n"));
        assert!(output.contains("Power of 8 ^ 2 = 64\n"));
        assert!(output.contains("Square root of 8 = "));
        assert!(output.contains("Sine of π/2 = 1\n"));
        assert!(output.trim_end().ends_with("Attempting to divide by zero:"));

        let basic = output.find("=== Basic Operations ===").unwrap();
        let advanced = output.find("=== Advanced Operations ===").unwrap();
        let trig = output.find("=== Trigonometric Functions ===").unwrap();
        let errors = output.find("=== Error Handling Check ===").unwrap();
        assert!(basic < advanced && advanced < trig && trig < errors);
    }

    #[test]
    fn test_zero_divisor_stops_in_basic_section() {
        let (output, result) = run(Operand::from(5), Operand::from(0));
        assert!(matches!(
            result.unwrap_err().category(),
            ErrorCategory::Value
        ));
        assert!(output.contains("Product of 5 * 0 = 0\n"));
        assert!(!output.contains("Quotient"));
        assert!(!output.contains("=== Advanced Operations ==="));
    }

    #[test]
    fn test_negative_operand_stops_at_square_root() {
        let (output, result) = run(Operand::from(-4), Operand::from(2));
        let err = result.unwrap_err();
        assert!(describe_failure(&err).starts_with("Value error: "));
        assert!(output.contains("Power of -4 ^ 2 = 16\n"));
        assert!(!output.contains("Square root"));
    }

    #[test]
    fn test_text_operand_is_a_type_error() {
        let (output, result) = run(Operand::parse("abc"), Operand::from(1));
        let err = result.unwrap_err();
        assert_eq!(
            describe_failure(&err),
            "Type error: add: expected a number for argument 1, got text \"abc\""
        );
        assert!(!output.contains("Sum of"));
    }

    #[test]
    fn test_prompt_reads_one_operand() {
        let mut input = Cursor::new("12\n3.5\n");
        let mut out = Vec::new();
        assert_eq!(prompt("a", &mut input, &mut out).unwrap(), Operand::from(12));
        assert_eq!(prompt("b", &mut input, &mut out).unwrap(), Operand::from(3.5));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Enter number a: Enter number b: "
        );

        let err = prompt("a", &mut input, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, CalcError::InputClosed));
        assert!(describe_failure(&err).starts_with("Unexpected error: "));
    }
}
