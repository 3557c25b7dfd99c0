//! Point codecs shared by every supported curve

use elliptic_curve::sec1::{FromEncodedPoint, ModulusSize, ToEncodedPoint};
use elliptic_curve::{AffinePoint, CurveArithmetic, FieldBytesSize, PublicKey};
use hcrypt_params::traditional::ecdh::{
    SEC1_TAG_COMPRESSED_EVEN, SEC1_TAG_COMPRESSED_ODD, SEC1_TAG_UNCOMPRESSED,
};

use super::{EllipticCurve, PointFormat};
use crate::error::{Error, Result};

/// Serialize `point` in the requested format.
pub(crate) fn encode<C>(point: &PublicKey<C>, format: PointFormat) -> Vec<u8>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    match format {
        PointFormat::Compressed => point.to_encoded_point(true).as_bytes().to_vec(),
        PointFormat::Uncompressed => point.to_encoded_point(false).as_bytes().to_vec(),
        // Same as uncompressed with the leading tag byte dropped
        PointFormat::LegacyUncompressed => point.to_encoded_point(false).as_bytes()[1..].to_vec(),
    }
}

/// Parse and validate a point.
///
/// The length and tag byte are checked against `format` first; the SEC1
/// decoder then rejects coordinates outside the field, points not on the
/// curve and the identity.
pub(crate) fn decode<C>(curve: EllipticCurve, format: PointFormat, bytes: &[u8]) -> Result<PublicKey<C>>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let expected = curve.encoded_point_size(format);
    if bytes.len() != expected {
        return Err(Error::Point {
            curve: curve.name(),
            reason: "unexpected encoded length",
        });
    }

    let decoded = match format {
        PointFormat::Compressed => {
            if bytes[0] != SEC1_TAG_COMPRESSED_EVEN && bytes[0] != SEC1_TAG_COMPRESSED_ODD {
                return Err(Error::Point {
                    curve: curve.name(),
                    reason: "bad compressed tag",
                });
            }
            PublicKey::<C>::from_sec1_bytes(bytes)
        }
        PointFormat::Uncompressed => {
            if bytes[0] != SEC1_TAG_UNCOMPRESSED {
                return Err(Error::Point {
                    curve: curve.name(),
                    reason: "bad uncompressed tag",
                });
            }
            PublicKey::<C>::from_sec1_bytes(bytes)
        }
        PointFormat::LegacyUncompressed => {
            let mut tagged = Vec::with_capacity(bytes.len() + 1);
            tagged.push(SEC1_TAG_UNCOMPRESSED);
            tagged.extend_from_slice(bytes);
            PublicKey::<C>::from_sec1_bytes(&tagged)
        }
    };

    decoded.map_err(|_| Error::Point {
        curve: curve.name(),
        reason: "not a valid curve point",
    })
}
