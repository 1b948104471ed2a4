pub mod configuration;

pub mod encoding {
    pub mod base62;
    pub mod chaincodec;
    pub mod encodingerror;
}

pub mod math {
    pub mod curve {
        pub mod curve;
        pub mod point2d;
        pub mod beziersegment;
    }
    pub mod rootsolver;
    pub mod round;
}

pub mod query {
    pub mod queryerror;
    pub mod scaledbezierchain;
    pub mod querycurve;
    pub mod curvequeryfunction;
    pub mod range;
}

pub use crate::configuration::SolverConfiguration;
pub use crate::encoding::chaincodec::{
    decode,
    decode_strict,
    encode
};
pub use crate::encoding::encodingerror::EncodingError;
pub use crate::query::curvequeryfunction::{
    CurveQueryFunction,
    encoded_curve_query_function
};
pub use crate::query::querycurve::{
    query_curve,
    query_curve_with,
    query_encoded_curve
};
pub use crate::query::queryerror::QueryCurveError;
pub use crate::query::range::offset_and_scale_from_range;
pub use crate::query::scaledbezierchain::ScaledBezierChain;
