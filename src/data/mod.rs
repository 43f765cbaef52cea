//! GeoJSON feature source.
//!
//! Features carry their property codes either directly (`"codes": [40, 0]`)
//! or as OSM-style tags (`"place": "city"`, `"admin_level": 2`). The tags
//! also pick the upstream layer: `railway`, `waterway` and `highway` features
//! become railways, waterways and roads, `landuse=residential` becomes
//! residential terrain. `name` is the label.

use crate::codes::{self, code_for_tag};
use crate::geo::{Coordinate, FeatureRecord, GeometryKind};
use crate::map::{Layer, TaggedFeature, TerrainCategory};
use anyhow::{Context, Result};
use geojson::{GeoJson, Geometry, JsonObject, JsonValue, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Load every file. Fails on the first file that cannot be read or parsed.
pub fn load_all(paths: &[PathBuf]) -> Result<Vec<TaggedFeature>> {
    let mut features = Vec::new();
    for path in paths {
        features.append(&mut load_features(path)?);
    }
    Ok(features)
}

/// Load the features of one GeoJSON file
pub fn load_features(path: &Path) -> Result<Vec<TaggedFeature>> {
    let mut bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let features = parse_features(&mut bytes).with_context(|| format!("parsing {}", path.display()))?;
    log::info!("loaded {} features from {}", features.len(), path.display());
    Ok(features)
}

/// Parse GeoJSON text. The buffer is used as scratch space by the parser.
pub fn parse_features(bytes: &mut [u8]) -> Result<Vec<TaggedFeature>> {
    let geojson: GeoJson = simd_json::serde::from_slice(bytes)?;
    Ok(features_from_geojson(&geojson))
}

/// Flatten a GeoJSON document into tagged features.
/// Multi-geometries yield one feature per part.
pub fn features_from_geojson(geojson: &GeoJson) -> Vec<TaggedFeature> {
    let mut out = Vec::new();
    match geojson {
        GeoJson::FeatureCollection(fc) => {
            for feature in &fc.features {
                push_feature(feature.geometry.as_ref(), feature.properties.as_ref(), &mut out);
            }
        }
        GeoJson::Feature(f) => push_feature(f.geometry.as_ref(), f.properties.as_ref(), &mut out),
        GeoJson::Geometry(geometry) => push_feature(Some(geometry), None, &mut out),
    }
    out
}

/// Codes, label and layer read from a feature's properties
struct Attributes {
    codes: Vec<u16>,
    label: Option<String>,
    layer: Layer,
}

fn tag_value(value: &JsonValue) -> Option<String> {
    value
        .as_str()
        .map(str::to_string)
        .or_else(|| value.as_u64().map(|n| n.to_string()))
}

fn read_attributes(props: Option<&JsonObject>) -> Attributes {
    let mut attrs = Attributes {
        codes: Vec::new(),
        label: None,
        layer: Layer::Auto,
    };
    let Some(props) = props else {
        return attrs;
    };

    if let Some(list) = props.get("codes").and_then(|v| v.as_array()) {
        attrs.codes.extend(
            list.iter()
                .filter_map(|v| v.as_u64())
                .filter_map(|n| u16::try_from(n).ok()),
        );
    }

    for (key, value) in props {
        let Some(value) = tag_value(value) else {
            continue;
        };
        match (key.as_str(), value.as_str()) {
            ("name", name) => {
                attrs.codes.push(codes::NAME);
                attrs.label = Some(name.to_string());
            }
            ("railway", _) => attrs.layer = Layer::Railway,
            ("waterway", _) => attrs.layer = Layer::Waterway,
            ("highway", _) => attrs.layer = Layer::Road,
            ("landuse", "residential") => {
                attrs.layer = Layer::Terrain(TerrainCategory::Residential)
            }
            (key, value) => attrs.codes.extend(code_for_tag(key, value)),
        }
    }

    attrs
}

fn to_coords(positions: &[Vec<f64>]) -> Vec<Coordinate> {
    positions
        .iter()
        .filter(|p| p.len() >= 2)
        .map(|p| Coordinate::new(p[0], p[1]))
        .collect()
}

fn push_feature(geometry: Option<&Geometry>, props: Option<&JsonObject>, out: &mut Vec<TaggedFeature>) {
    let Some(geometry) = geometry else {
        log::warn!("skipping feature without geometry");
        return;
    };
    let attrs = read_attributes(props);
    push_geometry(geometry, &attrs, out);
}

fn tagged(kind: GeometryKind, coords: Vec<Coordinate>, attrs: &Attributes) -> TaggedFeature {
    let mut record = FeatureRecord::new(kind, coords, attrs.codes.clone());
    record.label = attrs.label.clone();
    TaggedFeature {
        layer: attrs.layer,
        record,
    }
}

fn push_geometry(geometry: &Geometry, attrs: &Attributes, out: &mut Vec<TaggedFeature>) {
    match &geometry.value {
        Value::Point(p) => out.push(tagged(GeometryKind::Point, to_coords(std::slice::from_ref(p)), attrs)),
        Value::MultiPoint(points) => {
            for p in points {
                out.push(tagged(GeometryKind::Point, to_coords(std::slice::from_ref(p)), attrs));
            }
        }
        Value::LineString(line) => out.push(tagged(GeometryKind::Line, to_coords(line), attrs)),
        Value::MultiLineString(lines) => {
            for line in lines {
                out.push(tagged(GeometryKind::Line, to_coords(line), attrs));
            }
        }
        Value::Polygon(rings) => {
            if let Some(exterior) = rings.first() {
                out.push(tagged(GeometryKind::Polygon, to_coords(exterior), attrs));
            }
        }
        Value::MultiPolygon(polygons) => {
            for rings in polygons {
                if let Some(exterior) = rings.first() {
                    out.push(tagged(GeometryKind::Polygon, to_coords(exterior), attrs));
                }
            }
        }
        Value::GeometryCollection(geometries) => {
            for g in geometries {
                push_geometry(g, attrs, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::*;

    fn parse(json: &str) -> Vec<TaggedFeature> {
        let mut bytes = json.as_bytes().to_vec();
        parse_features(&mut bytes).unwrap()
    }

    #[test]
    fn test_tags_to_codes_and_label() {
        let features = parse(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","properties":{"place":"city","name":"Springfield"},
                 "geometry":{"type":"Point","coordinates":[-89.65,39.78]}},
                {"type":"Feature","properties":{"boundary":"administrative","admin_level":2},
                 "geometry":{"type":"LineString","coordinates":[[0,0],[1,1]]}}
            ]}"#,
        );

        assert_eq!(features.len(), 2);

        let city = &features[0];
        assert_eq!(city.layer, Layer::Auto);
        assert_eq!(city.record.kind, GeometryKind::Point);
        assert!(city.record.codes.contains(&PCITY));
        assert!(city.record.codes.contains(&NAME));
        assert_eq!(city.record.label(), Some("Springfield"));
        assert_eq!(city.record.coords.len(), 1);
        assert!((city.record.coords[0].lon + 89.65).abs() < 1e-9);
        assert!((city.record.coords[0].lat - 39.78).abs() < 1e-9);

        let border = &features[1];
        assert!(border.record.codes.contains(&BADMINISTRATIVE));
        assert!(border.record.codes.contains(&A2));
        assert_eq!(border.record.coords.len(), 2);
    }

    #[test]
    fn test_explicit_codes() {
        let features = parse(
            r#"{"type":"Feature","properties":{"codes":[73, 70000, 66]},
                "geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]],[[0.2,0.2],[0.3,0.2],[0.3,0.3]]]}}"#,
        );
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].record.codes, vec![NWATER, NWOOD]);
        assert_eq!(features[0].record.kind, GeometryKind::Polygon);
        assert_eq!(features[0].record.coords.len(), 4);
    }

    #[test]
    fn test_layers_from_tags() {
        let features = parse(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","properties":{"railway":"rail"},"geometry":{"type":"LineString","coordinates":[[0,0],[1,1]]}},
                {"type":"Feature","properties":{"waterway":"river"},"geometry":{"type":"LineString","coordinates":[[0,0],[1,1]]}},
                {"type":"Feature","properties":{"highway":"primary"},"geometry":{"type":"LineString","coordinates":[[0,0],[1,1]]}},
                {"type":"Feature","properties":{"landuse":"residential"},"geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}},
                {"type":"Feature","properties":null,"geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}}
            ]}"#,
        );
        let layers: Vec<Layer> = features.iter().map(|f| f.layer).collect();
        assert_eq!(
            layers,
            vec![
                Layer::Railway,
                Layer::Waterway,
                Layer::Road,
                Layer::Terrain(TerrainCategory::Residential),
                Layer::Auto,
            ]
        );
    }

    #[test]
    fn test_multi_geometries_split() {
        let features = parse(
            r#"{"type":"Feature","properties":{"natural":"wood"},
                "geometry":{"type":"GeometryCollection","geometries":[
                    {"type":"MultiPolygon","coordinates":[[[[0,0],[1,0],[1,1],[0,0]]],[[[2,2],[3,2],[3,3],[2,2]]]]},
                    {"type":"MultiPoint","coordinates":[[0,0],[1,1],[2,2]]}
                ]}}"#,
        );
        assert_eq!(features.len(), 5);
        assert!(features.iter().all(|f| f.record.codes == vec![NWOOD]));
        assert_eq!(features[0].record.kind, GeometryKind::Polygon);
        assert_eq!(features[4].record.kind, GeometryKind::Point);
    }

    #[test]
    fn test_feature_without_geometry_skipped() {
        let features = parse(r#"{"type":"Feature","properties":{"place":"town"},"geometry":null}"#);
        assert!(features.is_empty());
    }

    #[test]
    fn test_loaded_codes_match_default_table() {
        use crate::map::{classify_tagged, ShapeKind};

        let features = parse(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","properties":{"place":"town","name":"Shelbyville"},
                 "geometry":{"type":"Point","coordinates":[0,0]}},
                {"type":"Feature","properties":{"admin_level":"2","boundary":"administrative"},
                 "geometry":{"type":"LineString","coordinates":[[0,0],[1,1]]}},
                {"type":"Feature","properties":{"natural":"scree"},
                 "geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}}
            ]}"#,
        );
        let table = CodeTable::default();
        let kinds: Vec<ShapeKind> = features
            .iter()
            .map(|f| classify_tagged(f, &table).kind().clone())
            .collect();

        assert!(matches!(&kinds[0], ShapeKind::Settlement(label) if label.name == "Shelbyville"));
        assert_eq!(kinds[1], ShapeKind::Border);
        assert_eq!(kinds[2], ShapeKind::Terrain(TerrainCategory::Mountains));
    }

    #[test]
    fn test_load_all_reports_missing_file() {
        let missing = std::env::temp_dir().join("tile-compositor-missing.geojson");
        let err = load_all(&[missing.clone()]).unwrap_err();
        assert!(format!("{err:#}").contains(&missing.display().to_string()));
    }

    #[test]
    fn test_load_all_reads_every_file() {
        let dir = std::env::temp_dir();
        let first = dir.join(format!("tile-compositor-{}-a.geojson", std::process::id()));
        let second = dir.join(format!("tile-compositor-{}-b.geojson", std::process::id()));
        fs::write(&first, r#"{"type":"Point","coordinates":[1,2]}"#).unwrap();
        fs::write(&second, r#"{"type":"LineString","coordinates":[[0,0],[1,1]]}"#).unwrap();

        let features = load_all(&[first.clone(), second.clone()]).unwrap();
        let _ = fs::remove_file(&first);
        let _ = fs::remove_file(&second);

        assert_eq!(features.len(), 2);
        assert_eq!(features[0].record.kind, GeometryKind::Point);
        assert_eq!(features[1].record.kind, GeometryKind::Line);
    }

    #[test]
    fn test_malformed_input_is_error() {
        let mut bytes = b"{not json".to_vec();
        assert!(parse_features(&mut bytes).is_err());
    }
}
