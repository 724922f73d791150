//! Filter compilation
//!
//! Pairs every operator with the operand shape it accepts and builds the
//! matching predicate. Shape and operand errors surface here, at build
//! time, with the path of the offending field.

use indexmap::IndexMap;

use crate::errors::{ConvertError, MsgCheckError, Result};
use crate::filter::{FilterOperation, FilterSettings, FilterSpec, MetadataFilter, ValueFilter};
use crate::filter::{PredicateNode, PredicateTree};
use crate::predicate::{
    Compare, DecimalPrecision, Equality, ExactNull, ListContainment, NullCheck, Predicate,
    RegexMatch, TimePrecision, WildcardMatch,
};
use crate::{log_op_end, log_op_error, log_op_start};

/// Compile `spec` into a predicate tree
///
/// # Errors
///
/// - `FilterShape` when an operator is paired with an operand shape it cannot take
/// - `ValueParse` when a comparison operand or pattern does not parse
pub fn build(spec: &FilterSpec, settings: &FilterSettings) -> Result<PredicateTree> {
    log_op_start!("build_filter", field_count = spec.len() as u64);
    let start = std::time::Instant::now();

    let tree = build_tree(spec, settings).map_err(|e| {
        log_op_error!(
            "build_filter",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "build_filter",
        duration_ms = start.elapsed().as_millis() as u64,
        predicate_count = tree.predicate_count() as u64
    );
    Ok(tree)
}

/// Compile metadata property filters into one predicate per property
///
/// # Errors
///
/// Same as [`build`]; the path names the property.
pub fn build_metadata(
    filter: &MetadataFilter,
    settings: &FilterSettings,
) -> Result<IndexMap<String, Predicate>> {
    log_op_start!("build_metadata_filter", field_count = filter.len() as u64);
    let start = std::time::Instant::now();

    let result = filter
        .iter()
        .map(|(property, f)| {
            build_simple(f.operation, &f.value, settings)
                .map(|p| (property.to_string(), p))
                .map_err(|e| e.within_field(property))
        })
        .collect::<Result<IndexMap<_, _>>>()
        .map_err(|e| {
            log_op_error!(
                "build_metadata_filter",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    log_op_end!(
        "build_metadata_filter",
        duration_ms = start.elapsed().as_millis() as u64,
        predicate_count = result.len() as u64
    );
    Ok(result)
}

fn build_tree(spec: &FilterSpec, settings: &FilterSettings) -> Result<PredicateTree> {
    let mut tree = PredicateTree::new();
    for (field, filter) in spec.iter() {
        tracing::trace!(
            field_name = field,
            operation = %filter.operation(),
            "compiling field filter"
        );
        let node = build_node(filter, settings).map_err(|e| e.within_field(field))?;
        tree.insert(field, node);
    }
    Ok(tree)
}

fn build_node(filter: &ValueFilter, settings: &FilterSettings) -> Result<PredicateNode> {
    let leaf = match filter {
        ValueFilter::Simple { operation, value } => build_simple(*operation, value, settings)?,
        ValueFilter::SimpleSet { operation, values } => match operation {
            FilterOperation::In => {
                Predicate::ListContainment(ListContainment::new(values.clone(), false))
            }
            FilterOperation::NotIn => {
                Predicate::ListContainment(ListContainment::new(values.clone(), true))
            }
            other => return Err(shape_error(*other, filter)),
        },
        ValueFilter::Null { operation } => match operation {
            FilterOperation::Empty => Predicate::NullCheck(NullCheck::new(
                true,
                settings.check_null_value_as_empty(),
            )),
            FilterOperation::NotEmpty => Predicate::NullCheck(NullCheck::new(
                false,
                settings.check_null_value_as_empty(),
            )),
            FilterOperation::Equal => Predicate::ExactNull(ExactNull::new(false)),
            FilterOperation::NotEqual => Predicate::ExactNull(ExactNull::new(true)),
            other => return Err(shape_error(*other, filter)),
        },
        ValueFilter::List { operation, items } => {
            if *operation != FilterOperation::Equal {
                return Err(shape_error(*operation, filter));
            }
            let nodes = items
                .iter()
                .enumerate()
                .map(|(i, item)| build_node(item, settings).map_err(|e| e.within_index(i)))
                .collect::<Result<Vec<_>>>()?;
            return Ok(PredicateNode::List(nodes));
        }
        ValueFilter::Message { operation, filter: nested } => {
            if *operation != FilterOperation::Equal {
                return Err(shape_error(*operation, filter));
            }
            return Ok(PredicateNode::Message(build_tree(nested, settings)?));
        }
    };
    Ok(PredicateNode::Leaf(leaf))
}

fn build_simple(
    operation: FilterOperation,
    value: &str,
    settings: &FilterSettings,
) -> Result<Predicate> {
    let predicate = match operation {
        FilterOperation::Equal => Predicate::Equality(Equality::new(value, false)),
        FilterOperation::NotEqual => Predicate::Equality(Equality::new(value, true)),
        FilterOperation::Less
        | FilterOperation::NotLess
        | FilterOperation::More
        | FilterOperation::NotMore => Predicate::Compare(Compare::new(operation, value)?),
        FilterOperation::Like => Predicate::Regex(RegexMatch::new(value, false)?),
        FilterOperation::NotLike => Predicate::Regex(RegexMatch::new(value, true)?),
        FilterOperation::Wildcard => Predicate::Wildcard(WildcardMatch::new(value, false)?),
        FilterOperation::NotWildcard => Predicate::Wildcard(WildcardMatch::new(value, true)?),
        FilterOperation::EqDecimalPrecision => Predicate::DecimalPrecision(DecimalPrecision::new(
            value,
            settings.decimal_precision().clone(),
        )?),
        FilterOperation::EqTimePrecision => Predicate::TimePrecision(TimePrecision::new(
            value,
            settings.time_precision(),
        )?),
        FilterOperation::Empty
        | FilterOperation::NotEmpty
        | FilterOperation::In
        | FilterOperation::NotIn => {
            return Err(shape_error(operation, &ValueFilter::simple(operation, value)))
        }
    };
    Ok(predicate)
}

fn shape_error(operation: FilterOperation, filter: &ValueFilter) -> ConvertError {
    MsgCheckError::FilterShape {
        operator: operation.to_string(),
        shape: filter.shape_name().to_string(),
        operand: filter.operand_text(),
    }
    .into()
}
