//! Loader for the restricted OBJ subset the viewer understands.
//!
//! Only `v`, `vt`, `vn` and triangular `f p/t/n p/t/n p/t/n` records are
//! interpreted. Every other line is skipped, whatever bytes it holds, and a
//! trailing `#` comment is ignored on any record. Faces are expanded into a
//! flat triangle list, three corners per face.

use crate::render::mesh::MeshData;
use crate::utils::error::{ModelError, Result};
use glam::{Vec2, Vec3};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Corners per face record.
const FACE_CORNERS: usize = 3;
/// References per corner: position, texture coordinate, normal.
const CORNER_REFS: usize = 3;

pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<MeshData> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_obj(BufReader::new(file))
}

/// Parses OBJ records from any buffered reader.
///
/// Lines are split on raw `\n` bytes and decoded lossily, so non-UTF-8 bytes in
/// comments or unknown records do not fail the load.
pub fn parse_obj<R: BufRead>(reader: R) -> Result<MeshData> {
    let mut parser = ObjParser::default();
    for (index, bytes) in reader.split(b'\n').enumerate() {
        let line = index + 1;
        let bytes = bytes.map_err(|source| ModelError::Read { line, source })?;
        parser.parse_line(line, &String::from_utf8_lossy(&bytes))?;
    }
    Ok(parser.mesh)
}

#[derive(Default)]
struct ObjParser {
    positions: Vec<Vec3>,
    tex_coords: Vec<Vec2>,
    normals: Vec<Vec3>,
    mesh: MeshData,
}

impl ObjParser {
    fn parse_line(&mut self, line: usize, text: &str) -> Result<()> {
        let record = text.find('#').map_or(text, |comment| &text[..comment]);
        let mut fields = record.split_whitespace();
        match fields.next() {
            Some("v") => {
                let [x, y, z] = parse_floats(&mut fields, line, "v")?;
                self.positions.push(Vec3::new(x, y, z));
            }
            Some("vt") => {
                let [u, v] = parse_floats(&mut fields, line, "vt")?;
                self.tex_coords.push(Vec2::new(u, v));
            }
            Some("vn") => {
                let [x, y, z] = parse_floats(&mut fields, line, "vn")?;
                self.normals.push(Vec3::new(x, y, z));
            }
            Some("f") => {
                let refs = parse_face(fields, line)?;
                self.push_face(line, &refs)?;
            }
            _ => {}
        }
        Ok(())
    }

    fn push_face(&mut self, line: usize, refs: &[i64; FACE_CORNERS * CORNER_REFS]) -> Result<()> {
        // Resolve the whole face first so a bad corner never leaves a partial triangle.
        let mut corners = [(Vec3::ZERO, Vec2::ZERO, Vec3::ZERO); FACE_CORNERS];
        for (corner, chunk) in corners.iter_mut().zip(refs.chunks_exact(CORNER_REFS)) {
            let position = resolve(&self.positions, chunk[0]).ok_or(
                ModelError::PositionOutOfRange {
                    line,
                    index: chunk[0],
                    count: self.positions.len(),
                },
            )?;
            let tex_coord = resolve(&self.tex_coords, chunk[1]).unwrap_or(Vec2::ZERO);
            let normal = resolve(&self.normals, chunk[2]).unwrap_or(Vec3::ZERO);
            *corner = (position, tex_coord, normal);
        }

        for (position, tex_coord, normal) in corners {
            self.mesh.push_corner(position, tex_coord, normal);
        }
        Ok(())
    }
}

/// Looks up a 1-based reference, `None` when it falls outside `[1, len]`.
fn resolve<T: Copy>(items: &[T], reference: i64) -> Option<T> {
    let index = usize::try_from(reference).ok()?.checked_sub(1)?;
    items.get(index).copied()
}

fn parse_floats<'a, const N: usize>(
    fields: &mut impl Iterator<Item = &'a str>,
    line: usize,
    keyword: &'static str,
) -> Result<[f32; N]> {
    let mut values = [0.0; N];
    for value in values.iter_mut() {
        *value = fields
            .next()
            .and_then(|field| field.parse().ok())
            .ok_or(ModelError::InvalidAttribute { line, keyword })?;
    }
    Ok(values)
}

fn parse_face<'a>(
    fields: impl Iterator<Item = &'a str>,
    line: usize,
) -> Result<[i64; FACE_CORNERS * CORNER_REFS]> {
    let corners: Vec<&str> = fields.collect();
    let refs: Vec<Option<i64>> = corners
        .iter()
        .flat_map(|corner| corner.split('/'))
        .map(|field| field.parse().ok())
        .collect();
    let found = refs.iter().flatten().count();

    let well_formed = corners.len() == FACE_CORNERS
        && corners.iter().all(|c| c.split('/').count() == CORNER_REFS)
        && found == FACE_CORNERS * CORNER_REFS;
    if !well_formed {
        return Err(ModelError::UnsupportedFace { line, found });
    }

    let mut out = [0; FACE_CORNERS * CORNER_REFS];
    for (slot, value) in out.iter_mut().zip(refs.into_iter().flatten()) {
        *slot = value;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CUBE: &str = "\
# unit cube, positions only
o Cube
v -1 -1 -1
v  1 -1 -1
v  1  1 -1
v -1  1 -1
v -1 -1  1
v  1 -1  1
v  1  1  1
v -1  1  1
s off
f 1/1/1 2/1/1 3/1/1
f 1/1/1 3/1/1 4/1/1
f 5/1/1 6/1/1 7/1/1
f 5/1/1 7/1/1 8/1/1
f 1/1/1 2/1/1 6/1/1
f 1/1/1 6/1/1 5/1/1
f 4/1/1 3/1/1 7/1/1
f 4/1/1 7/1/1 8/1/1
f 1/1/1 4/1/1 8/1/1
f 1/1/1 8/1/1 5/1/1
f 2/1/1 3/1/1 7/1/1
f 2/1/1 7/1/1 6/1/1
";

    #[test]
    fn test_cube_without_texcoords_or_normals() {
        let mesh = parse_obj(CUBE.as_bytes()).unwrap();

        assert_eq!(mesh.positions().len(), 36);
        assert_eq!(mesh.tex_coords().len(), 36);
        assert_eq!(mesh.normals().len(), 36);
        assert!(mesh.tex_coords().iter().all(|uv| *uv == Vec2::ZERO));
        assert!(mesh.normals().iter().all(|n| *n == Vec3::ZERO));
        assert_eq!(mesh.positions()[0], Vec3::new(-1.0, -1.0, -1.0));
        assert_eq!(mesh.positions()[35], Vec3::new(1.0, -1.0, 1.0));
    }

    #[test]
    fn test_attributes_resolved_per_corner() {
        let source = "\
v 0 0 0
v 1 0 0
v 0 1 0
vt 0.0 0.0
vt 1.0 0.0
vt 0.0 1.0
vn 0 0 1
vn 0 1 0
f 1/1/1 2/2/1 3/3/2
";
        let mesh = parse_obj(source.as_bytes()).unwrap();

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.positions()[1], Vec3::X);
        assert_eq!(mesh.tex_coords()[2], Vec2::new(0.0, 1.0));
        assert_eq!(mesh.normals()[0], Vec3::Z);
        assert_eq!(mesh.normals()[2], Vec3::Y);
    }

    #[test]
    fn test_out_of_range_texcoord_and_normal_default_to_zero() {
        let source = "\
v 0 0 0
v 1 0 0
v 0 1 0
vt 0.5 0.5
vn 0 0 1
f 1/0/0 2/2/9 3/-1/1
";
        let mesh = parse_obj(source.as_bytes()).unwrap();

        assert_eq!(mesh.tex_coords(), &[Vec2::ZERO, Vec2::ZERO, Vec2::ZERO]);
        assert_eq!(mesh.normals(), &[Vec3::ZERO, Vec3::ZERO, Vec3::Z]);
    }

    #[test]
    fn test_face_count_determines_output_length() {
        let mut source = String::from("v 0 0 0\nv 1 0 0\nv 0 1 0\nv 1 1 0\n");
        for _ in 0..7 {
            source.push_str("f 1/1/1 2/1/1 3/1/1\nf 2/1/1 4/1/1 3/1/1\n");
        }
        let mesh = parse_obj(source.as_bytes()).unwrap();

        assert_eq!(mesh.vertex_count(), 3 * 14);
        assert_eq!(mesh.triangle_count(), 14);
    }

    #[test]
    fn test_short_face_fails_the_load() {
        let source = "\
v 0 0 0
v 1 0 0
v 0 1 0
f 1/1/1 2/1/1 3/1/1
f 1/1/1 2/1/1 3/1
";
        match parse_obj(source.as_bytes()) {
            Err(ModelError::UnsupportedFace { line, found }) => {
                assert_eq!(line, 5);
                assert_eq!(found, 8);
            }
            other => panic!("expected UnsupportedFace, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_references_are_rejected() {
        let source = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1//1 2//1 3//1\n";
        assert!(matches!(
            parse_obj(source.as_bytes()),
            Err(ModelError::UnsupportedFace { found: 6, .. })
        ));

        let positions_only = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
        assert!(matches!(
            parse_obj(positions_only.as_bytes()),
            Err(ModelError::UnsupportedFace { found: 3, .. })
        ));
    }

    #[test]
    fn test_quads_are_rejected() {
        let source = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1/1/1 2/1/1 3/1/1 4/1/1\n";
        assert!(matches!(
            parse_obj(source.as_bytes()),
            Err(ModelError::UnsupportedFace { line: 5, found: 12 })
        ));
    }

    #[test]
    fn test_position_reference_is_bounds_checked() {
        let past_end = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1/1/1 2/1/1 4/1/1\n";
        match parse_obj(past_end.as_bytes()) {
            Err(ModelError::PositionOutOfRange { line, index, count }) => {
                assert_eq!((line, index, count), (4, 4, 3));
            }
            other => panic!("expected PositionOutOfRange, got {:?}", other),
        }

        let zero = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 0/1/1 2/1/1 3/1/1\n";
        assert!(matches!(
            parse_obj(zero.as_bytes()),
            Err(ModelError::PositionOutOfRange { index: 0, .. })
        ));
    }

    #[test]
    fn test_positions_must_be_declared_before_use() {
        let source = "f 1/1/1 2/1/1 3/1/1\nv 0 0 0\nv 1 0 0\nv 0 1 0\n";
        assert!(matches!(
            parse_obj(source.as_bytes()),
            Err(ModelError::PositionOutOfRange { count: 0, .. })
        ));
    }

    #[test]
    fn test_malformed_vertex_record() {
        let err = parse_obj("v 0 0 0\nvn 0 zero 1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ModelError::InvalidAttribute { line: 2, keyword: "vn" }));
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn test_unknown_lines_are_skipped() {
        let source = "\
mtllib eyeball.mtl
# comment

usemtl Iris
g iris
v 0 0 0 1.0
v 1 0 0
v 0 1 0
l 1 2
f 1/1/1 2/1/1 3/1/1
";
        let mesh = parse_obj(source.as_bytes()).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
    }

    #[test]
    fn test_trailing_comments_are_ignored() {
        let source = "\
v 0 0 0 # origin
v 1 0 0
v 0 1 0
f 1/1/1 2/1/1 3/1/1 # tri
";
        let mesh = parse_obj(source.as_bytes()).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.positions()[0], Vec3::ZERO);
    }

    #[test]
    fn test_non_utf8_comment_is_skipped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"# exported by Caf\xe9 3D\r\nv 0 0 0\r\nv 1 0 0\r\nv 0 1 0\r\n")
            .unwrap();
        file.write_all(b"g \xff\xfe\nf 1/1/1 2/1/1 3/1/1\n").unwrap();

        let mesh = load_obj(file.path()).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.positions()[1], Vec3::X);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CUBE.as_bytes()).unwrap();

        let mesh = load_obj(file.path()).unwrap();
        assert_eq!(mesh.vertex_count(), 36);
    }

    #[test]
    fn test_shipped_eyeball_model() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/objects/eyeball.obj");
        let mesh = load_obj(path).unwrap();

        assert_eq!(mesh.triangle_count(), 720);
        assert!(mesh.normals().iter().all(|n| (n.length() - 1.0).abs() < 1e-4));
        let (min, max) = mesh.bounds().unwrap();
        assert!(min.cmpge(Vec3::splat(-1.0001)).all() && max.cmple(Vec3::splat(1.0001)).all());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.obj");

        match load_obj(&path) {
            Err(ModelError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
