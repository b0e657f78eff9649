use vecmath::{VecMathError, Vector3};

fn close(a: Vector3, b: Vector3) -> bool {
    (a - b).magnitude() < 1e-5
}

#[test]
fn test_arithmetic_operators() {
    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::new(-4.0, 0.5, 2.0);
    assert_eq!(a + b, Vector3::new(-3.0, 2.5, 5.0));
    assert_eq!(a - b, Vector3::new(5.0, 1.5, 1.0));
    assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
    assert_eq!(2.0 * a, a * 2.0);
    assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));

    let mut c = a;
    c += b;
    assert_eq!(c, a + b);
    c -= b;
    assert_eq!(c, a);
}

#[test]
fn test_magnitude_and_normalize() {
    let v = Vector3::new(0.0, 3.0, 4.0);
    assert_eq!(v.magnitude(), 5.0);
    let unit = v.normalize().unwrap();
    assert!((unit.magnitude() - 1.0).abs() < 1e-6);
    assert!(close(unit, Vector3::new(0.0, 0.6, 0.8)));
}

#[test]
fn test_normalize_zero_vector() {
    assert_eq!(
        Vector3::ZERO.normalize(),
        Err(VecMathError::ZeroLength {
            operation: "normalize"
        })
    );
}

#[test]
fn test_dot_and_cross() {
    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::new(4.0, 5.0, 6.0);
    assert_eq!(a.dot(b), 32.0);
    assert_eq!(a.cross(b), Vector3::new(-3.0, 6.0, -3.0));
    assert_eq!(a.cross(b).dot(a), 0.0);
    assert_eq!(b.cross(a), -a.cross(b));
    assert_eq!(Vector3::Y.cross(Vector3::Z), Vector3::X);
}

#[test]
fn test_angle_in_degrees() {
    let degrees = |a: Vector3, b: Vector3| a.angle(b).unwrap();
    assert!((degrees(Vector3::X, Vector3::Y) - 90.0).abs() < 1e-4);
    assert!(degrees(Vector3::X, Vector3::X * 7.0) < 0.1);
    assert!((degrees(Vector3::X, -Vector3::X) - 180.0).abs() < 1e-4);
    assert!((degrees(Vector3::X, Vector3::new(1.0, 1.0, 0.0)) - 45.0).abs() < 1e-4);
}

#[test]
fn test_angle_of_nearly_parallel_vectors_is_finite() {
    let a = Vector3::new(0.1, 0.2, 0.3);
    let angle = a.angle(a * 3.0).unwrap();
    assert!(angle.is_finite());
    assert!(angle < 0.1);
}

#[test]
fn test_angle_with_zero_vector() {
    assert!(matches!(
        Vector3::ZERO.angle(Vector3::X),
        Err(VecMathError::ZeroLength { .. })
    ));
    assert!(Vector3::X.angle(Vector3::ZERO).is_err());
}

#[test]
fn test_display() {
    assert_eq!(Vector3::new(1.0, -2.0, 0.5).to_string(), "<1, -2, 0.5>");
}

#[test]
fn test_pod_layout() {
    let points = [Vector3::new(1.0, 2.0, 3.0), Vector3::new(4.0, 5.0, 6.0)];
    let floats: &[f32] = bytemuck::cast_slice(&points);
    assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(bytemuck::bytes_of(&points[0]).len(), 12);
    assert_eq!(<[f32; 3]>::from(points[1]), [4.0, 5.0, 6.0]);
}
