#[allow(unused_imports)]
pub use num_traits;
#[allow(unused_imports)]
pub use num_traits::Zero;

#[allow(unused_imports)]
pub use tracing::{error, info, warn};

#[allow(unused_imports)]
pub use crate::{
    config::*,
    util::{
        float,
        float::FiniteFloat,
        linalg,
        linalg::Vec2,
    },
};
