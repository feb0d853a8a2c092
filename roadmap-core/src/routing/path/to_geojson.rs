use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use serde_json::json;

use crate::{Error, model::RoadGraph};

use super::RoutePath;

impl RoutePath {
    /// Converts the path to a `GeoJSON` `FeatureCollection`, one `LineString`
    /// feature per segment in travel order.
    pub fn to_geojson(&self, graph: &RoadGraph) -> Result<FeatureCollection, Error> {
        let features = self
            .segments
            .iter()
            .enumerate()
            .map(|(position, &segment)| {
                let segment = graph
                    .segment(segment)
                    .ok_or_else(|| Error::InvalidData(format!("Unknown segment {segment:?}")))?;
                let road = &graph.roads[segment.road];
                let geometry = Geometry::new(GeoJsonValue::from(&segment.geometry));

                let value = json!({
                    "type": "Feature",
                    "geometry": geometry,
                    "properties": {
                        "position": position,
                        "road_id": road.id,
                        "road_name": road.name,
                        "one_way": road.one_way,
                        "length": segment.length,
                    }
                });

                Feature::from_json_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        })
    }

    pub fn to_geojson_string(&self, graph: &RoadGraph) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson(graph)?)
            .map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}
