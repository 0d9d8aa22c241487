//! DIMACS CNF output.
//!
//! Standard format used in SAT competitions; lets any external solver
//! consume an encoded formula.

use carousel_base::Result;
use std::io::Write;

use crate::cnf::Cnf;

/// Renders a formula as DIMACS CNF text.
#[must_use]
pub fn to_dimacs(cnf: &Cnf) -> String {
    let mut out = String::new();
    out.push_str(&format!("p cnf {} {}\n", cnf.num_vars(), cnf.num_clauses()));
    for clause in cnf.clauses() {
        for lit in clause {
            out.push_str(&format!("{lit} "));
        }
        out.push_str("0\n");
    }
    out
}

/// Writes a formula as DIMACS CNF.
pub fn write_dimacs<W: Write>(mut writer: W, cnf: &Cnf) -> Result<()> {
    writer.write_all(to_dimacs(cnf).as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimacs_output_shape() {
        let cnf = Cnf::from_clauses(3, vec![vec![1, -2], vec![2, 3]]);
        assert_eq!(to_dimacs(&cnf), "p cnf 3 2\n1 -2 0\n2 3 0\n");
    }

    #[test]
    fn test_dimacs_empty_formula() {
        let cnf = Cnf::new(5);
        assert_eq!(to_dimacs(&cnf), "p cnf 5 0\n");
    }

    #[test]
    fn test_write_dimacs_to_buffer() {
        let cnf = Cnf::from_clauses(2, vec![vec![-1, 2]]);
        let mut buf = Vec::new();
        write_dimacs(&mut buf, &cnf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "p cnf 2 1\n-1 2 0\n");
    }
}
