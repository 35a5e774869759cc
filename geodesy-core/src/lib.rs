/*!
# Geodetic inverse problem

Surface distance and forward azimuths between two positions on the WGS-84
ellipsoid. [`InverseEngine`] drives Vincenty's inverse formulae and
recovers the nearly antipodal pairs the iteration cannot settle through
spherical and planar approximations; [`inverse`] is the one-call entry
point.

```
use geodesy_core::{Position, inverse};

let sfo = Position::from_degrees(37.6188, -122.3750)?;
let jfk = Position::from_degrees(40.6413, -73.7781)?;

let solution = inverse(sfo, jfk)?;
assert!(solution.distance_meters > 4_000_000.0);
# Ok::<(), geodesy_core::GeoError>(())
```
*/

pub mod angle;
pub mod defaults;
mod dms;
pub mod ellipsoid;
mod error;
mod inverse;
pub mod nvector;
mod position;

pub use self::{
    ellipsoid::Ellipsoid,
    error::GeoError,
    inverse::{
        HighAccuracySolver, InverseEngine, InverseResult, NoHighAccuracy,
        distance_between_positions, inverse,
    },
    position::{Latitude, Longitude, Position},
};
