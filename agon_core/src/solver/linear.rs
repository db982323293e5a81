use ndarray::{Array1, Array2};

/// Coefficients with absolute value not greater than this are treated as zero.
pub(crate) const PIVOT_EPSILON: f64 = 1e-12;

/// Solves `a x = b` with Gauss-Jordan elimination and partial pivoting.
///
/// Returns `None` for inconsistent system. For underdetermined system free variables
/// are set to zero.
pub(crate) fn solve_linear_system(mut a: Array2<f64>, mut b: Array1<f64>) -> Option<Array1<f64>>{
    let (rows, cols) = a.dim();
    let mut pivot_columns = Vec::with_capacity(rows.min(cols));
    let mut r = 0;
    for c in 0..cols{
        if r >= rows{
            break;
        }
        let (best, best_abs) = (r..rows)
            .map(|i| (i, a[[i, c]].abs()))
            .fold((r, -1.0), |acc, x| if x.1 > acc.1 { x } else { acc });
        if best_abs <= PIVOT_EPSILON{
            continue;
        }
        if best != r{
            for k in 0..cols{
                a.swap([r, k], [best, k]);
            }
            b.swap(r, best);
        }
        let pivot = a[[r, c]];
        for k in c..cols{
            a[[r, k]] /= pivot;
        }
        b[r] /= pivot;
        for i in 0..rows{
            if i == r{
                continue;
            }
            let factor = a[[i, c]];
            if factor == 0.0{
                continue;
            }
            for k in c..cols{
                let delta = factor * a[[r, k]];
                a[[i, k]] -= delta;
            }
            let delta = factor * b[r];
            b[i] -= delta;
        }
        pivot_columns.push(c);
        r += 1;
    }
    if (r..rows).any(|i| b[i].abs() > PIVOT_EPSILON){
        return None;
    }
    let mut x = Array1::zeros(cols);
    for (i, c) in pivot_columns.into_iter().enumerate(){
        x[c] = b[i];
    }
    Some(x)
}

#[cfg(test)]
mod tests{
    use ndarray::{array, Array1};
    use crate::solver::linear::solve_linear_system;

    #[test]
    fn square_system(){
        let x = solve_linear_system(array![[-2.0, 4.0], [1.0, 1.0]], array![0.0, 1.0]).unwrap();
        assert!((x[0] - 2.0/3.0).abs() < 1e-12);
        assert!((x[1] - 1.0/3.0).abs() < 1e-12);
    }

    #[test]
    fn inconsistent_system(){
        assert_eq!(solve_linear_system(array![[-2.0], [1.0]], array![0.0, 1.0]), None);
    }

    #[test]
    fn underdetermined_system_sets_free_variables_to_zero(){
        let x = solve_linear_system(array![[1.0, 1.0]], array![1.0]).unwrap();
        assert_eq!(x, Array1::from(vec![1.0, 0.0]));
    }

    #[test]
    fn needs_row_swap(){
        let x = solve_linear_system(array![[0.0, 1.0], [1.0, 0.0]], array![3.0, 5.0]).unwrap();
        assert_eq!(x, Array1::from(vec![5.0, 3.0]));
    }
}
