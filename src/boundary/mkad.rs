//! MKAD (Moscow Ring Road) kilometre posts.

use crate::geo::GeoPoint;

/// Kilometre posts of the MKAD ring road in travel order, one per kilometre
pub const MKAD_VERTICES: [GeoPoint; 108] = [
    GeoPoint::new(55.774558, 37.842762),
    GeoPoint::new(55.76522, 37.842789),
    GeoPoint::new(55.755723, 37.842627),
    GeoPoint::new(55.747399, 37.841828),
    GeoPoint::new(55.739103, 37.841217),
    GeoPoint::new(55.730482, 37.840175),
    GeoPoint::new(55.721939, 37.83916),
    GeoPoint::new(55.712203, 37.837121),
    GeoPoint::new(55.703048, 37.83262),
    GeoPoint::new(55.694287, 37.829512),
    GeoPoint::new(55.68529, 37.831353),
    GeoPoint::new(55.675945, 37.834605),
    GeoPoint::new(55.667752, 37.837597),
    GeoPoint::new(55.658667, 37.839348),
    GeoPoint::new(55.650053, 37.833842),
    GeoPoint::new(55.643713, 37.824787),
    GeoPoint::new(55.637347, 37.814564),
    GeoPoint::new(55.62913, 37.802473),
    GeoPoint::new(55.623758, 37.794235),
    GeoPoint::new(55.617713, 37.781928),
    GeoPoint::new(55.611755, 37.771139),
    GeoPoint::new(55.604956, 37.758725),
    GeoPoint::new(55.599677, 37.747945),
    GeoPoint::new(55.594143, 37.734785),
    GeoPoint::new(55.589234, 37.723062),
    GeoPoint::new(55.583983, 37.709425),
    GeoPoint::new(55.578834, 37.696256),
    GeoPoint::new(55.574019, 37.683167),
    GeoPoint::new(55.571999, 37.668911),
    GeoPoint::new(55.573093, 37.647765),
    GeoPoint::new(55.573928, 37.633419),
    GeoPoint::new(55.574732, 37.616719),
    GeoPoint::new(55.575816, 37.60107),
    GeoPoint::new(55.5778, 37.586536),
    GeoPoint::new(55.581271, 37.571938),
    GeoPoint::new(55.585143, 37.555732),
    GeoPoint::new(55.587509, 37.545132),
    GeoPoint::new(55.5922, 37.526366),
    GeoPoint::new(55.594728, 37.516108),
    GeoPoint::new(55.60249, 37.502274),
    GeoPoint::new(55.609685, 37.49391),
    GeoPoint::new(55.617424, 37.484846),
    GeoPoint::new(55.625801, 37.474668),
    GeoPoint::new(55.630207, 37.469925),
    GeoPoint::new(55.641041, 37.456864),
    GeoPoint::new(55.648794, 37.448195),
    GeoPoint::new(55.654675, 37.441125),
    GeoPoint::new(55.660424, 37.434424),
    GeoPoint::new(55.670701, 37.42598),
    GeoPoint::new(55.67994, 37.418712),
    GeoPoint::new(55.686873, 37.414868),
    GeoPoint::new(55.695697, 37.407528),
    GeoPoint::new(55.702805, 37.397952),
    GeoPoint::new(55.709657, 37.388969),
    GeoPoint::new(55.718273, 37.383283),
    GeoPoint::new(55.728581, 37.378369),
    GeoPoint::new(55.735201, 37.374991),
    GeoPoint::new(55.744789, 37.370248),
    GeoPoint::new(55.75435, 37.369188),
    GeoPoint::new(55.762936, 37.369053),
    GeoPoint::new(55.771444, 37.369619),
    GeoPoint::new(55.779722, 37.369853),
    GeoPoint::new(55.789542, 37.372943),
    GeoPoint::new(55.79723, 37.379824),
    GeoPoint::new(55.805796, 37.386876),
    GeoPoint::new(55.814629, 37.390397),
    GeoPoint::new(55.823606, 37.393236),
    GeoPoint::new(55.83251, 37.395275),
    GeoPoint::new(55.840376, 37.394709),
    GeoPoint::new(55.850141, 37.393056),
    GeoPoint::new(55.858801, 37.397314),
    GeoPoint::new(55.867051, 37.405588),
    GeoPoint::new(55.872703, 37.416601),
    GeoPoint::new(55.877041, 37.429429),
    GeoPoint::new(55.881091, 37.443596),
    GeoPoint::new(55.882828, 37.459065),
    GeoPoint::new(55.884625, 37.473096),
    GeoPoint::new(55.888897, 37.48861),
    GeoPoint::new(55.894232, 37.5016),
    GeoPoint::new(55.899578, 37.513206),
    GeoPoint::new(55.90526, 37.527597),
    GeoPoint::new(55.907687, 37.543443),
    GeoPoint::new(55.909388, 37.559577),
    GeoPoint::new(55.910907, 37.575531),
    GeoPoint::new(55.909257, 37.590344),
    GeoPoint::new(55.905472, 37.604637),
    GeoPoint::new(55.901637, 37.619603),
    GeoPoint::new(55.898533, 37.635961),
    GeoPoint::new(55.896973, 37.647648),
    GeoPoint::new(55.895449, 37.667878),
    GeoPoint::new(55.894868, 37.681721),
    GeoPoint::new(55.893884, 37.698807),
    GeoPoint::new(55.889094, 37.712363),
    GeoPoint::new(55.883555, 37.723636),
    GeoPoint::new(55.877501, 37.735791),
    GeoPoint::new(55.874698, 37.741261),
    GeoPoint::new(55.862464, 37.764519),
    GeoPoint::new(55.861979, 37.765992),
    GeoPoint::new(55.850257, 37.788216),
    GeoPoint::new(55.850383, 37.788522),
    GeoPoint::new(55.844167, 37.800586),
    GeoPoint::new(55.832707, 37.822819),
    GeoPoint::new(55.828789, 37.829754),
    GeoPoint::new(55.821072, 37.837148),
    GeoPoint::new(55.811599, 37.838926),
    GeoPoint::new(55.802781, 37.840004),
    GeoPoint::new(55.793991, 37.840965),
    GeoPoint::new(55.785017, 37.841576),
];
