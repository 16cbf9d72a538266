/// Small integer matrix toolkit behind the hover tooltips: multiply,
/// raise to a power, render as a LaTeX bmatrix. Also holds the truncated
/// 4x4 creation/annihilation ladder matrices and the factorial helper
/// used for combinatorial normalization.
///
/// # Examples
/// ```
/// use KiTeX::Utils::matrix_ops::{creation_matrix, mat_exp, matrix_to_latex};
/// let squared = mat_exp(&creation_matrix(), 2);
/// println!("{}", matrix_to_latex(&squared));
/// ```
pub mod matrix_ops;
