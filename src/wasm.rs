//! Bindings for driving a puzzle from a browser page.
//!
//! The page keeps everything visual: filling regions, fades, the win and lose screens, the auto-demo flag and navigation.
//! It calls in after each click with plain strings and reads back plain values.

use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::builder::BuilderInvalidReason;
use crate::graph::AdjacencyGraph;
use crate::model::{GraphModel, ModelError};

/// A puzzle with string-named regions and colors.
#[wasm_bindgen]
pub struct MapPuzzle {
    // index is the region id
    names: Vec<String>,
    model: GraphModel<u32, String>,
}

pub(crate) fn intern(names: &mut Vec<String>, name: String) -> u32 {
    let id = match names.iter().position(|existing| *existing == name) {
        Some(id) => id,
        None => {
            names.push(name);
            names.len() - 1
        }
    };

    id as u32
}

pub(crate) fn rename(reason: BuilderInvalidReason<u32>, names: &[String]) -> BuilderInvalidReason<&str> {
    let name = |id: u32| names.get(id as usize).map_or("?", String::as_str);
    match reason {
        BuilderInvalidReason::DuplicateEdge(a, b) => BuilderInvalidReason::DuplicateEdge(name(a), name(b)),
        BuilderInvalidReason::SelfLoop(a) => BuilderInvalidReason::SelfLoop(name(a)),
        BuilderInvalidReason::FeatureOutOfBounds(a) => BuilderInvalidReason::FeatureOutOfBounds(name(a)),
    }
}

/// `None` if any entry is missing or not a string.
pub(crate) fn all_names<I>(values: I) -> Option<Vec<String>>
where
    I: IntoIterator<Item = Option<String>>,
{
    values.into_iter().collect()
}

fn string_entries(array: &Array) -> impl Iterator<Item = Option<String>> + '_ {
    array.iter().map(|value| value.as_string())
}

impl MapPuzzle {
    fn id_of(&self, region: &str) -> Result<u32, JsError> {
        match self.names.iter().position(|name| name == region) {
            Some(id) => Ok(id as u32),
            None => Err(JsError::new(&ModelError::UnknownRegion(region).to_string())),
        }
    }

    fn name_of(&self, id: u32) -> &str {
        self.names.get(id as usize).map_or("?", String::as_str)
    }
}

#[wasm_bindgen]
impl MapPuzzle {
    /// Build a puzzle from an array of `[region, region]` border pairs.
    ///
    /// Regions are enumerated in order of first appearance. Repeated borders and self-borders are rejected.
    #[wasm_bindgen(constructor)]
    pub fn new(borders: Array) -> Result<MapPuzzle, JsError> {
        let mut names = Vec::new();
        let mut edges = Vec::with_capacity(borders.length() as usize);

        for pair in borders.iter() {
            // Array::from would also accept strings and other array-likes
            let pair = Array::is_array(&pair)
                .then(|| Array::from(&pair))
                .filter(|pair| pair.length() == 2)
                .and_then(|pair| all_names(string_entries(&pair)));
            let Some([a, b]) = pair.and_then(|pair| <[String; 2]>::try_from(pair).ok()) else {
                return Err(JsError::new("each border must be a pair of region names"));
            };
            edges.push((intern(&mut names, a), intern(&mut names, b)));
        }

        let graph = AdjacencyGraph::from_edges(edges)
            .map_err(|reason| JsError::new(&rename(reason, &names).to_string()))?;

        Ok(MapPuzzle { names, model: GraphModel::new(graph) })
    }

    /// Paint `region` with `color`.
    pub fn assign(&mut self, region: &str, color: String) -> Result<(), JsError> {
        let id = self.id_of(region)?;
        self.model.assign(id, color)?;
        Ok(())
    }

    /// Remove any color from `region`.
    pub fn clear(&mut self, region: &str) -> Result<(), JsError> {
        let id = self.id_of(region)?;
        self.model.clear(id)?;
        Ok(())
    }

    /// Remove every color.
    #[wasm_bindgen(js_name = clearAll)]
    pub fn clear_all(&mut self) {
        self.model.clear_all();
    }

    /// Whether every region is painted.
    #[wasm_bindgen(js_name = isComplete)]
    pub fn is_complete(&self) -> bool {
        self.model.is_complete()
    }

    /// The color of `region`, or `undefined` if unpainted.
    #[wasm_bindgen(js_name = colorOf)]
    pub fn color_of(&self, region: &str) -> Result<Option<String>, JsError> {
        let id = self.id_of(region)?;
        Ok(self.model.color_of(id)?.cloned())
    }

    /// `"complete"`, `"conflict"` or `"incomplete"`.
    pub fn evaluate(&self) -> String {
        self.model.engine().evaluate().to_string()
    }

    /// Names of the regions to highlight, in construction order.
    pub fn conflicts(&self) -> Array {
        self.model.engine().conflicts().into_iter()
            .map(|id| JsValue::from_str(self.name_of(id)))
            .collect()
    }

    /// A `[region, color]` suggestion drawn from `palette`, or `undefined` when there is none.
    ///
    /// Every palette entry must be a color name.
    pub fn hint(&self, palette: Array) -> Result<Option<Array>, JsError> {
        let palette = all_names(string_entries(&palette))
            .ok_or_else(|| JsError::new("each palette entry must be a color name"))?;

        Ok(self.model.engine().suggest_hint(&palette).into_pair().map(|(id, color)| {
            Array::of2(&JsValue::from_str(self.name_of(id)), &JsValue::from_str(&color))
        }))
    }
}
