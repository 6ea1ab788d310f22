//! Recipe matching and output computation.
//!
//! Pure functions over the caller-supplied material list and the static
//! recipe table. Policy is deliberately simple: rows are scanned in table
//! order and the first match wins; overlapping recipes are not arbitrated.

use crate::state::ItemId;

/// Caller-supplied material line. Untrusted: must be re-checked against the
/// live inventory at execution time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MaterialRequest {
    pub item_id: ItemId,
    pub count: u32,
}

impl MaterialRequest {
    pub fn new(item_id: ItemId, count: u32) -> Self {
        Self { item_id, count }
    }
}

/// One required material line of a recipe row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MaterialRequirement {
    pub item_id: ItemId,
    pub count: u32,
}

/// Static recipe table row. Read-only at runtime.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RecipeRow {
    pub id: u32,
    pub materials: Vec<MaterialRequirement>,
    pub result_item_id: ItemId,
}

impl RecipeRow {
    /// A row matches when every required `(id, count)` line is covered by a
    /// supplied line with at least that count. Empty requirement or supply
    /// lists never match.
    pub fn is_match(&self, supplied: &[MaterialRequest]) -> bool {
        if self.materials.is_empty() || supplied.is_empty() {
            return false;
        }
        self.materials.iter().all(|requirement| {
            supplied
                .iter()
                .any(|line| line.item_id == requirement.item_id && line.count >= requirement.count)
        })
    }

    /// Craftable output count: the minimum over requirements of
    /// `supplied / required` (integer division). Zero when any requirement is
    /// unsupplied.
    pub fn output_count(&self, supplied: &[MaterialRequest]) -> u32 {
        self.materials
            .iter()
            .map(|requirement| {
                supplied
                    .iter()
                    .find(|line| line.item_id == requirement.item_id)
                    .map(|line| line.count / requirement.count)
                    .unwrap_or(0)
            })
            .min()
            .unwrap_or(0)
    }
}

/// Outcome of a successful table scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedRecipe<'a> {
    pub recipe: &'a RecipeRow,
    pub output_count: u32,
    /// Amounts the craft actually consumes: each requirement scaled by the
    /// output count. Always covered by the supplied amounts.
    pub consumed: Vec<(ItemId, u32)>,
}

/// Scans `rows` in order and resolves the first matching recipe.
pub fn resolve_recipe<'a>(
    supplied: &[MaterialRequest],
    rows: &'a [RecipeRow],
) -> Option<ResolvedRecipe<'a>> {
    let recipe = rows.iter().find(|row| row.is_match(supplied))?;
    let output_count = recipe.output_count(supplied);
    let consumed = recipe
        .materials
        .iter()
        .map(|requirement| (requirement.item_id, requirement.count * output_count))
        .collect();
    Some(ResolvedRecipe {
        recipe,
        output_count,
        consumed,
    })
}

/// The item produced by a craft, as reported to observers and parked in
/// combination slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CraftedItem {
    pub item_id: ItemId,
    pub count: u32,
}

impl CraftedItem {
    pub fn new(item_id: ItemId, count: u32) -> Self {
        Self { item_id, count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: u32, materials: &[(u32, u32)], result: u32) -> RecipeRow {
        RecipeRow {
            id,
            materials: materials
                .iter()
                .map(|&(item, count)| MaterialRequirement {
                    item_id: ItemId(item),
                    count,
                })
                .collect(),
            result_item_id: ItemId(result),
        }
    }

    fn supplied(lines: &[(u32, u32)]) -> Vec<MaterialRequest> {
        lines
            .iter()
            .map(|&(item, count)| MaterialRequest::new(ItemId(item), count))
            .collect()
    }

    #[test]
    fn resolves_output_and_consumed_amounts() {
        let rows = vec![recipe(1, &[(1, 2), (2, 1)], 10)];
        let resolved = resolve_recipe(&supplied(&[(1, 3), (2, 1)]), &rows).unwrap();

        assert_eq!(resolved.recipe.id, 1);
        assert_eq!(resolved.output_count, 1);
        assert_eq!(resolved.consumed, vec![(ItemId(1), 2), (ItemId(2), 1)]);
    }

    #[test]
    fn first_matching_row_wins() {
        let rows = vec![
            recipe(1, &[(1, 1)], 10),
            recipe(2, &[(1, 1), (2, 1)], 11),
        ];
        let resolved = resolve_recipe(&supplied(&[(1, 5), (2, 5)]), &rows).unwrap();
        assert_eq!(resolved.recipe.id, 1);
    }

    #[test]
    fn empty_supply_never_matches() {
        let rows = vec![recipe(1, &[(1, 1)], 10)];
        assert!(resolve_recipe(&[], &rows).is_none());
    }

    #[test]
    fn recipe_without_requirements_never_matches() {
        let rows = vec![recipe(1, &[], 10)];
        assert!(resolve_recipe(&supplied(&[(1, 1)]), &rows).is_none());
    }

    #[test]
    fn insufficient_line_fails_the_match() {
        let rows = vec![recipe(1, &[(1, 2), (2, 1)], 10)];
        assert!(resolve_recipe(&supplied(&[(1, 1), (2, 1)]), &rows).is_none());
    }

    #[test]
    fn output_scales_with_supply() {
        let row = recipe(1, &[(1, 2), (2, 1)], 10);
        assert_eq!(row.output_count(&supplied(&[(1, 4), (2, 2)])), 2);
        assert_eq!(row.output_count(&supplied(&[(1, 4), (2, 1)])), 1);
    }
}
