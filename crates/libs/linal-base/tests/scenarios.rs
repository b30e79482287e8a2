use linal_base::{
    color::Color,
    dim::MaxVector,
    matrix::{Determinant, Inverse, Matrix},
    num::approx_eq,
    quat::rotation_around_axis,
    units::Radians,
    vector,
    vector::{cross, dot, Vector},
};
use std::any::TypeId;

#[test]
fn vector_sum() {
    assert_eq!(vector![1i32, 2, 3] + vector![4i32, 5, 6], vector![5i32, 7, 9]);
}

#[test]
fn mixed_vector_sum_promotes_and_pads() {
    let v = vector![1i32, 2] + vector![0.5f32, 0.5, 0.5];
    fn type_of<T: 'static>(_: &T) -> TypeId { TypeId::of::<T>() }
    assert_eq!(type_of(&v), TypeId::of::<Vector<f32, 3>>());
    assert_eq!(type_of(&v), TypeId::of::<MaxVector<f32, 2, 3>>());
    assert_eq!(v, vector![1.5f32, 2.5, 0.5]);
}

#[test]
fn identity_determinant_and_minor() {
    let i = Matrix::<f64, 3, 3>::identity();
    assert_eq!(i.determinant(), 1.0);
    let m = i.without_row::<2>(0).without_col::<2>(0);
    assert_eq!(m, Matrix::<f64, 2, 2>::identity());
}

#[test]
fn quarter_turn_around_z() {
    let q = rotation_around_axis(std::f64::consts::FRAC_PI_2, &vector![0.0f64, 0.0, 1.0]);
    let v = q * vector![1.0f64, 0.0, 0.0];
    assert!(approx_eq(&v, &vector![0.0f64, 1.0, 0.0], 1e-6));
}

#[test]
fn colors_from_hsva() {
    let red = Color::from_hsva(Radians::ZERO, 1.0, 1.0, 1.0);
    assert!(approx_eq(&red, &Color::new(1.0, 0.0, 0.0, 1.0), 1e-6));
    let green = Color::from_hsva(Radians::TWO_PI / 3.0, 1.0, 1.0, 1.0);
    assert!(approx_eq(&green, &Color::GREEN, 1e-6));
}

#[test]
fn singular_matrix_has_zero_inverse() {
    let m = Matrix::<f64, 2, 2>::from_rows([[1.0, 2.0], [2.0, 4.0]]);
    assert_eq!(m.determinant(), 0.0);
    assert_eq!(m.inverse(), Matrix::<f64, 2, 2>::zero());
}

#[test]
fn cross_product_is_orthogonal() {
    let a = vector![1i64, -2, 3];
    let b = vector![4i64, 0, -1];
    let c = cross(&a, &b);
    assert_eq!(c, -cross(&b, &a));
    assert_eq!(dot(&a, &c), 0);
    assert_eq!(dot(&b, &c), 0);
}
