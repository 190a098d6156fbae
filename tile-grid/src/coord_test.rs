//
// Copyright (c) Jérôme Villafruela. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::coord::{validate_latitude, validate_longitude, BoundingBox, Point};
use crate::error::ErrorKind;

#[test]
fn test_latitude_bounds() {
    assert_eq!(validate_latitude(90.0), Ok(90.0));
    assert_eq!(validate_latitude(-90.0), Ok(-90.0));
    assert_eq!(validate_latitude(0.0), Ok(0.0));
    assert_eq!(validate_latitude(91.0).unwrap_err().kind(), ErrorKind::Range);
    assert_eq!(validate_latitude(-91.0).unwrap_err().kind(), ErrorKind::Range);
    assert!(validate_latitude(f64::NAN).is_err());
}

#[test]
fn test_longitude_bounds() {
    assert_eq!(validate_longitude(180.0), Ok(180.0));
    assert_eq!(validate_longitude(-180.0), Ok(-180.0));
    assert_eq!(validate_longitude(180.5).unwrap_err().kind(), ErrorKind::Range);
    assert_eq!(validate_longitude(-999.0).unwrap_err().kind(), ErrorKind::Range);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        validate_latitude(999.0).unwrap_err().to_string(),
        "invalid latitude 999 (WGS84 [-90,+90])"
    );
    assert_eq!(
        validate_longitude(-181.5).unwrap_err().to_string(),
        "invalid longitude -181.5 (WGS84 [-180,+180])"
    );
}

#[test]
fn test_point() {
    let p = Point::new(-54.806, -68.3688).unwrap();
    assert_eq!(p.lat, -54.806);
    assert_eq!(p.lon, -68.3688);
    assert!(Point::new(45.0, 999.0).is_err());
    assert!(Point::new(999.0, 5.0).is_err());
}

#[test]
fn test_bbox_normalization() {
    let expected = BoundingBox {
        min_lat: 35.03259,
        min_lon: 135.71654,
        max_lat: 35.03504,
        max_lon: 135.71988,
    };
    assert_eq!(
        BoundingBox::new(35.03504, 135.71988, 35.03259, 135.71654),
        Ok(expected)
    );
    assert_eq!(
        BoundingBox::new(35.03259, 135.71654, 35.03504, 135.71988),
        Ok(expected)
    );
    // axes are sorted independently
    assert_eq!(
        BoundingBox::new(35.03504, 135.71654, 35.03259, 135.71988),
        Ok(expected)
    );
    assert_eq!(
        expected.min_corner(),
        Point {
            lat: 35.03259,
            lon: 135.71654
        }
    );
    assert_eq!(
        expected.max_corner(),
        Point {
            lat: 35.03504,
            lon: 135.71988
        }
    );
}

#[test]
fn test_bbox_validation() {
    assert!(BoundingBox::new(999.0, 45.031614, 5.634817, 45.034214).is_err());
    assert!(BoundingBox::new(5.630665, 999.0, 5.634817, 45.034214).is_err());
    assert!(BoundingBox::new(5.630665, 45.031614, -999.0, 45.034214).is_err());
    assert!(BoundingBox::new(5.630665, 45.031614, 5.634817, -999.0).is_err());
}
