use std::cell::{
    RefCell,
    RefMut
};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::script::instruction::Instruction;
use crate::script::scripterror::ScriptError;
use crate::segment::segmentmap::{
    IntSegmentMap,
    SegmentMap
};

/// Registry of named segment maps driven by [`Instruction`] scripts.
/// Mutating instructions create the named map on first use; `print` fails
/// when the name is unknown.
pub struct SegmentMapManager {
    map_cell: RefCell<HashMap<String, IntSegmentMap>>,
}

impl SegmentMapManager {
    pub fn new() -> SegmentMapManager {
        SegmentMapManager { map_cell: RefCell::new(HashMap::new()) }
    }

    pub fn map(&self) -> RefMut<'_, HashMap<String, IntSegmentMap>> {
        self.map_cell.borrow_mut()
    }

    /// Canonical form of the named map as a JSON string, e.g.
    /// `[[10,1],[30,0]]`.
    pub fn canonical_form(&self, name: &str) -> Result<String, ScriptError> {
        let map = self.map();
        let segments = map
            .get(name)
            .ok_or_else(|| ScriptError::MapNotFound(name.to_owned()))?;
        Ok(serde_json::to_string(&segments.to_canonical_form())?)
    }

    /// Applies one instruction; `print` yields the canonical form, the
    /// mutating instructions yield nothing.
    pub fn apply(&self, instruction: &Instruction) -> Result<Option<String>, ScriptError> {
        match instruction {
            Instruction::Add { map, from, to, amount } => {
                self.map()
                    .entry(map.to_owned())
                    .or_insert_with(SegmentMap::new)
                    .add(*from, *to, *amount);
                Ok(None)
            }
            Instruction::Set { map, from, to, amount } => {
                self.map()
                    .entry(map.to_owned())
                    .or_insert_with(SegmentMap::new)
                    .set(*from, *to, *amount);
                Ok(None)
            }
            Instruction::Print { map } => self.canonical_form(map).map(Some),
        }
    }

    pub fn run(&self, instructions: &[Instruction]) -> Result<Vec<String>, ScriptError> {
        let mut outputs = Vec::new();
        for instruction in instructions {
            if let Some(line) = self.apply(instruction)? {
                outputs.push(line);
            }
        }
        Ok(outputs)
    }

    /// Loads a JSON array of instructions from `file_path` and runs it.
    pub fn from_reader<FP: AsRef<Path>>(&self, file_path: FP) -> Result<Vec<String>, ScriptError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let instructions: Vec<Instruction> = serde_json::from_reader(reader)?;
        self.run(&instructions)
    }
}

#[cfg(test)]
mod tests {
    use super::SegmentMapManager;
    use crate::script::instruction::Instruction;
    use crate::script::scripterror::ScriptError;

    fn script(json: &str) -> Vec<Instruction> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn runs_the_reference_sequence() {
        let manager = SegmentMapManager::new();
        let instructions = script(
            r#"[
                {"op":"add","map":"segments","from":10,"to":30,"amount":1},
                {"op":"print","map":"segments"},
                {"op":"add","map":"segments","from":20,"to":40,"amount":1},
                {"op":"print","map":"segments"},
                {"op":"add","map":"segments","from":10,"to":40,"amount":-1},
                {"op":"print","map":"segments"},
                {"op":"set","map":"segments","from":0,"to":100,"amount":0},
                {"op":"print","map":"segments"}
            ]"#,
        );
        let outputs = manager.run(&instructions).unwrap();
        assert_eq!(
            outputs,
            vec![
                "[[10,1],[30,0]]",
                "[[10,1],[20,2],[30,1],[40,0]]",
                "[[20,1],[30,0]]",
                "[]"
            ]
        );
    }

    #[test]
    fn named_maps_are_independent() {
        let manager = SegmentMapManager::new();
        let instructions = script(
            r#"[
                {"op":"add","map":"a","from":10,"to":30,"amount":1},
                {"op":"add","map":"b","from":10,"to":30,"amount":5},
                {"op":"print","map":"a"},
                {"op":"print","map":"b"}
            ]"#,
        );
        let outputs = manager.run(&instructions).unwrap();
        assert_eq!(outputs, vec!["[[10,1],[30,0]]", "[[10,5],[30,0]]"]);
    }

    #[test]
    fn printing_an_unknown_map_fails() {
        let manager = SegmentMapManager::new();
        let result = manager.apply(&Instruction::Print { map: "missing".to_owned() });
        match result {
            Err(ScriptError::MapNotFound(name)) => assert_eq!(name, "missing"),
            other => panic!("expected MapNotFound, got {:?}", other),
        }
    }
}
