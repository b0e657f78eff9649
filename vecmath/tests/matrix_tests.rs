use vecmath::{Matrix3, VecMathError, Vector3};

#[test]
fn test_identity_product() {
    let v = Vector3::new(3.0, -1.0, 2.5);
    assert_eq!(Matrix3::IDENTITY * v, v);
    assert_eq!(Matrix3::default(), Matrix3::IDENTITY);
}

#[test]
fn test_matrix_vector_product() {
    let m = Matrix3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    assert_eq!(m * Vector3::new(1.0, 0.0, -1.0), Vector3::new(-2.0, -2.0, -2.0));
    assert_eq!(Matrix3::ZERO * Vector3::X, Vector3::ZERO);
}

#[test]
fn test_matrix_matrix_product() {
    let a = Matrix3::from_rows([[1.0, 2.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 2.0]]);
    let b = Matrix3::from_rows([[1.0, 0.0, 0.0], [3.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
    let product = a * b;
    assert_eq!(
        product.rows,
        [[7.0, 2.0, 0.0], [3.0, 1.0, 0.0], [0.0, 0.0, 2.0]]
    );
    assert_ne!(a * b, b * a);
    assert_eq!(a * Matrix3::IDENTITY, a);
}

#[test]
fn test_rotation_composes() {
    let quarter = Matrix3::rotation_z(90.0);
    let half = quarter * quarter;
    let flipped = half * Vector3::X;
    assert!((flipped + Vector3::X).magnitude() < 1e-6);
}

#[test]
fn test_try_from_nested_rows() {
    let rows = vec![vec![1.0, 0.0, 0.0], vec![0.0, 2.0, 0.0], vec![0.0, 0.0, 3.0]];
    let m = Matrix3::try_from(rows.as_slice()).unwrap();
    assert_eq!(m * Vector3::new(1.0, 1.0, 1.0), Vector3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_try_from_wrong_shape() {
    let two_rows = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
    assert_eq!(
        Matrix3::try_from(two_rows.as_slice()),
        Err(VecMathError::NotThreeByThree {
            rows: 2,
            row: 0,
            columns: 3
        })
    );

    let ragged = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0], vec![7.0, 8.0, 9.0]];
    assert_eq!(
        Matrix3::try_from(ragged.as_slice()),
        Err(VecMathError::NotThreeByThree {
            rows: 3,
            row: 1,
            columns: 2
        })
    );
}
