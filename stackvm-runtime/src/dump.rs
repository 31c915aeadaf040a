//! Memory dump adapter
//!
//! Serializes an inclusive address range of the memory array as a record
//! list, one record per address. The JSON output is written only after the
//! whole document has been rendered, so a failed dump never leaves a
//! partially-written file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use stackvm_spec::{Address, Word, MEM_SIZE};

use crate::error::{Result, RuntimeError};
use crate::memory::Memory;

/// One dumped memory cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryCell {
    pub address: Address,
    pub value: Word,
}

/// Snapshot the inclusive range `[start, end]`.
///
/// Requires `start <= end < MEM_SIZE`.
pub fn snapshot(memory: &Memory, start: Address, end: Address) -> Result<Vec<MemoryCell>> {
    if start > end || end as usize >= MEM_SIZE {
        return Err(RuntimeError::RangeOutOfBounds { start, end });
    }

    let cells = memory.cells();
    Ok((start..=end)
        .map(|address| MemoryCell {
            address,
            value: cells[address as usize],
        })
        .collect())
}

/// Render the range as a JSON record list
pub fn to_json(memory: &Memory, start: Address, end: Address) -> Result<String> {
    let cells = snapshot(memory, start, end)?;
    Ok(serde_json::to_string_pretty(&cells)?)
}

/// Render the range as plain `address: value` lines
pub fn to_text(memory: &Memory, start: Address, end: Address) -> Result<String> {
    let cells = snapshot(memory, start, end)?;
    let mut output = String::new();
    for cell in cells {
        output.push_str(&format!("{}: {}\n", cell.address, cell.value));
    }
    Ok(output)
}

/// Write the JSON dump to a file, fully rendered first
pub fn write_json(path: impl AsRef<Path>, memory: &Memory, start: Address, end: Address) -> Result<()> {
    let json = to_json(memory, start, end)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_range_is_inclusive() {
        let mut memory = Memory::new();
        memory.write(3, 7).unwrap();

        let cells = snapshot(&memory, 0, 2).unwrap();
        assert_eq!(
            cells,
            vec![
                MemoryCell { address: 0, value: 0 },
                MemoryCell { address: 1, value: 0 },
                MemoryCell { address: 2, value: 0 },
            ]
        );

        // Address 3 only appears once the range covers it
        let cells = snapshot(&memory, 3, 3).unwrap();
        assert_eq!(cells, vec![MemoryCell { address: 3, value: 7 }]);
    }

    #[test]
    fn test_snapshot_whole_memory() {
        let memory = Memory::new();
        let cells = snapshot(&memory, 0, (MEM_SIZE - 1) as Address).unwrap();
        assert_eq!(cells.len(), MEM_SIZE);
    }

    #[test]
    fn test_snapshot_rejects_bad_ranges() {
        let memory = Memory::new();

        // end past the last cell
        let err = snapshot(&memory, 0, MEM_SIZE as Address).unwrap_err();
        assert!(matches!(err, RuntimeError::RangeOutOfBounds { .. }));

        // inverted range
        let err = snapshot(&memory, 5, 4).unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::RangeOutOfBounds { start: 5, end: 4 }
        ));
    }

    #[test]
    fn test_json_shape() {
        let mut memory = Memory::new();
        memory.write(1, 42).unwrap();

        let json = to_json(&memory, 0, 1).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed[0]["address"], 0);
        assert_eq!(parsed[0]["value"], 0);
        assert_eq!(parsed[1]["address"], 1);
        assert_eq!(parsed[1]["value"], 42);
    }

    #[test]
    fn test_json_roundtrips_through_serde() {
        let memory = Memory::new();
        let json = to_json(&memory, 10, 12).unwrap();
        let cells: Vec<MemoryCell> = serde_json::from_str(&json).unwrap();
        assert_eq!(cells, snapshot(&memory, 10, 12).unwrap());
    }

    #[test]
    fn test_text_rendering() {
        let mut memory = Memory::new();
        memory.write(0, 9).unwrap();

        let text = to_text(&memory, 0, 1).unwrap();
        assert_eq!(text, "0: 9\n1: 0\n");
    }

    #[test]
    fn test_write_json_creates_complete_file() {
        let memory = Memory::new();
        let path = std::env::temp_dir().join("stackvm-dump-complete-test.json");

        write_json(&path, &memory, 0, 2).unwrap();
        let cells: Vec<MemoryCell> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(cells.len(), 3);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_failed_dump_writes_nothing() {
        let memory = Memory::new();
        let path = std::env::temp_dir().join("stackvm-dump-failed-test.json");
        fs::remove_file(&path).ok();

        assert!(write_json(&path, &memory, 0, MEM_SIZE as Address).is_err());
        assert!(!path.exists());
    }
}
