#![cfg(feature = "cli")]

use anyhow::Result;
use std::process::Command;

fn complex_calc() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_complex-calc"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_stdout_carries_each_result_once() -> Result<()> {
    let output = complex_calc().output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec![
            "Addition result: 4 + 6i",
            "Multiplication result: -5 + 10i",
            "Division result: 0.44 + 0.08i",
        ]
    );

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("ComplexCalculator"));
    assert!(stderr.contains("Division result: 0.44 + 0.08i"));
    Ok(())
}

#[test]
fn test_zero_divisor_exits_with_error() -> Result<()> {
    let output = complex_calc()
        .args(["--rhs-real", "0", "--rhs-imaginary", "0", "--operations", "divide"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Division cannot divide by 0 + 0i"));
    Ok(())
}
