use cnn_rs::{CnnError, Tensor};

#[test]
fn test_zeros_shape_and_contents() {
    let t = Tensor::zeros(&[2, 3]);
    assert_eq!(t.shape(), &[2, 3]);
    assert_eq!(t.len(), 6);
    assert_eq!(t.sum(), 0.0);
}

#[test]
fn test_from_vec_validates_element_count() {
    let t = Tensor::from_vec(&[2, 2], vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(t.shape(), &[2, 2]);
    assert_eq!(t.get(&[1, 0]).unwrap(), 3.0);

    let err = Tensor::from_vec(&[2, 2], vec![1.0, 2.0, 3.0]).unwrap_err();
    assert!(matches!(err, CnnError::ShapeMismatch { .. }));
}

#[test]
fn test_get_out_of_range() {
    let t = Tensor::zeros(&[2, 2]);
    let err = t.get(&[2, 0]).unwrap_err();
    assert_eq!(
        err,
        CnnError::IndexOutOfRange {
            index: vec![2, 0],
            shape: vec![2, 2],
        }
    );
}

#[test]
fn test_tensor_addition() {
    let a = Tensor::from_vec(&[2, 2], vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let b = Tensor::from_vec(&[2, 2], vec![10.0, 20.0, 30.0, 40.0]).unwrap();
    let c = a.add(&b).unwrap();
    assert_eq!(c.shape(), &[2, 2]);
    assert_eq!(c.to_vec(), vec![11.0, 22.0, 33.0, 44.0]);
}

#[test]
fn test_tensor_multiplication() {
    let a = Tensor::from_vec(&[3], vec![1.0, 2.0, 3.0]).unwrap();
    let b = Tensor::from_vec(&[3], vec![4.0, 5.0, 6.0]).unwrap();
    let c = a.mul(&b).unwrap();
    assert_eq!(c.to_vec(), vec![4.0, 10.0, 18.0]);
}

#[test]
fn test_elementwise_shape_mismatch() {
    let a = Tensor::zeros(&[2, 2]);
    let b = Tensor::zeros(&[2, 3]);
    assert!(matches!(
        a.add(&b).unwrap_err(),
        CnnError::ShapeMismatch { .. }
    ));
    assert!(matches!(
        a.mul(&b).unwrap_err(),
        CnnError::ShapeMismatch { .. }
    ));
}

#[test]
fn test_reductions() {
    let t = Tensor::from_vec(&[2, 2], vec![-1.0, 7.0, 3.0, 0.5]).unwrap();
    assert_eq!(t.max().unwrap(), 7.0);
    assert_eq!(t.sum(), 9.5);

    let empty = Tensor::zeros(&[0]);
    assert!(matches!(empty.max().unwrap_err(), CnnError::EmptyInput(_)));
}

#[test]
fn test_serde_round_trip() {
    let t = Tensor::from_vec(&[2, 3], vec![1.0, -2.0, 3.5, 0.0, 4.25, -6.0]).unwrap();
    let json = serde_json::to_string(&t).unwrap();
    let back: Tensor = serde_json::from_str(&json).unwrap();
    assert_eq!(back, t);
}
