use std::ops::Mul;

use crate::error::VecMathError;
use crate::vector::Vector3;

/// A 3x3 single-precision matrix stored row by row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3 {
    pub rows: [[f32; 3]; 3],
}

impl Matrix3 {
    pub const IDENTITY: Self = Self::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
    pub const ZERO: Self = Self::from_rows([[0.0; 3]; 3]);

    #[must_use]
    pub const fn from_rows(rows: [[f32; 3]; 3]) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn from_columns(columns: [[f32; 3]; 3]) -> Self {
        Self::from_rows(columns).transpose()
    }

    /// Rotation about the z axis by `degrees`, counter-clockwise.
    #[must_use]
    pub fn rotation_z(degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::from_rows([[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]])
    }

    #[must_use]
    pub fn transpose(self) -> Self {
        let mut rows = [[0.0; 3]; 3];
        for (i, row) in self.rows.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                rows[j][i] = *value;
            }
        }
        Self { rows }
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<Vector3> {
        self.rows.get(index).copied().map(Vector3::from)
    }
}

impl Default for Matrix3 {
    /// The identity matrix.
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TryFrom<&[Vec<f32>]> for Matrix3 {
    type Error = VecMathError;

    /// Reads nested rows, as produced by generic matrix code.
    fn try_from(rows: &[Vec<f32>]) -> Result<Self, Self::Error> {
        if rows.len() != 3 {
            return Err(VecMathError::NotThreeByThree {
                rows: rows.len(),
                row: 0,
                columns: rows.first().map_or(0, Vec::len),
            });
        }
        let mut matrix = Self::ZERO;
        for (i, row) in rows.iter().enumerate() {
            let Ok(values) = <[f32; 3]>::try_from(row.as_slice()) else {
                return Err(VecMathError::NotThreeByThree {
                    rows: 3,
                    row: i,
                    columns: row.len(),
                });
            };
            matrix.rows[i] = values;
        }
        Ok(matrix)
    }
}

impl Mul<Vector3> for Matrix3 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        let [r0, r1, r2] = self.rows.map(Vector3::from);
        Vector3::new(r0.dot(v), r1.dot(v), r2.dot(v))
    }
}

impl Mul for Matrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let columns = rhs.transpose().rows.map(Vector3::from);
        let rows = self.rows.map(|row| {
            let row = Vector3::from(row);
            columns.map(|column| row.dot(column))
        });
        Self { rows }
    }
}
