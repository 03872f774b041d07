//! Outlines of polyface meshes.
//!
//! A polyface mesh lists its points first and its faces after them. Each face
//! names three or four 1-based point indices; a negative index hides the
//! edge that starts at that point and a zero ends the list early.

use crate::entities::Vertex;
use crate::types::Vector2;
use ahash::AHashMap;

struct Face {
    indices: Vec<usize>,
    hidden: Vec<bool>,
}

impl Face {
    fn from_indices(raw: &[i64; 4]) -> Option<Face> {
        let mut face = Face {
            indices: Vec::with_capacity(4),
            hidden: Vec::with_capacity(4),
        };
        for &index in raw.iter().take_while(|&&index| index != 0) {
            face.indices.push((index.unsigned_abs() - 1) as usize);
            face.hidden.push(index < 0);
        }
        matches!(face.indices.len(), 3 | 4).then_some(face)
    }

    /// Visible directed edges, in face order
    fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let count = self.indices.len();
        (0..count)
            .filter(|&start| !self.hidden[start])
            .map(move |start| (self.indices[start], self.indices[(start + 1) % count]))
    }
}

/// Chain the visible edges of a polyface mesh into polylines.
///
/// Edges shared by two faces are interior to the mesh and are dropped, so
/// two triangles sharing a side produce one closed outline. Each remaining
/// edge extends the first chain that ends where it starts; afterwards a
/// chain whose head matches another chain's tail is appended to it. Indices
/// that point past the vertex list are skipped.
pub fn polyface_outline(vertices: &[Vertex]) -> Vec<Vec<Vector2>> {
    let mut points = Vec::new();
    let mut faces = Vec::new();
    for vertex in vertices {
        match &vertex.faces {
            Some(raw) => faces.extend(Face::from_indices(raw)),
            None => points.push(vertex.point()),
        }
    }

    let edges: Vec<(usize, usize)> = faces.iter().flat_map(Face::edges).collect();
    let mut uses: AHashMap<(usize, usize), usize> = AHashMap::new();
    for &(a, b) in &edges {
        *uses.entry((a.min(b), a.max(b))).or_default() += 1;
    }

    let mut chains: Vec<Vec<usize>> = Vec::new();
    for (a, b) in edges {
        if uses[&(a.min(b), a.max(b))] > 1 {
            continue;
        }
        match chains.iter_mut().find(|chain| chain.last() == Some(&a)) {
            Some(chain) => chain.push(b),
            None => chains.push(vec![a, b]),
        }
    }

    for i in 0..chains.len() {
        let Some(&head) = chains[i].first() else {
            continue;
        };
        let target = (0..chains.len()).find(|&j| j != i && chains[j].last() == Some(&head));
        if let Some(j) = target {
            let moved = std::mem::take(&mut chains[i]);
            chains[j].extend_from_slice(&moved[1..]);
        }
    }

    chains
        .into_iter()
        .filter(|chain| !chain.is_empty())
        .map(|chain| chain.into_iter().filter_map(|i| points.get(i).copied()).collect())
        .collect()
}
