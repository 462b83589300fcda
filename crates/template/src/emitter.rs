use std::borrow::Cow;

use sqf_common::{MetricsRegistry, Result, SqfError};
use sqlparser::ast::{
    Assignment, AssignmentTarget, BinaryOperator, CastKind, Delete, Expr, FromTable, Function,
    FunctionArg, FunctionArgExpr, FunctionArgumentList, FunctionArguments, DuplicateTreatment,
    GroupByExpr, Insert, Interval, Join, JoinConstraint, JoinOperator, ObjectName, Offset,
    OnInsert, OrderByExpr, Query, Select, SelectItem, SetExpr, Statement, TableAlias, TableFactor,
    TableWithJoins, UnaryOperator, Value as SqlValue, Values,
};
use tracing::{debug, warn};

use crate::model::{TableRef, Value};
use crate::state::TemplateState;

/// Templatize one parsed statement into `state`.
///
/// Handlers append normalised tokens to the state's buffer, push extracted
/// literals as params, and record table references as they are visited.
/// Keywords are emitted UPPERCASE with single-space separation; binary and
/// unary operators use their lower-case symbolic names (`eq`, `and`, ...)
/// so templates fingerprint by shape rather than render as runnable SQL.
///
/// Statement kinds without a dedicated handler are not errors: they log a
/// diagnostic and fall back to the parser's canonical rendering.
pub fn emit_statement(state: &mut TemplateState, statement: &Statement) -> Result<()> {
    match statement {
        Statement::Query(query) => emit_query(state, query),
        Statement::Insert(insert) => emit_insert(state, insert),
        Statement::Update {
            table,
            assignments,
            selection,
            ..
        } => emit_update(state, table, assignments, selection.as_ref()),
        Statement::Delete(delete) => emit_delete(state, delete),
        Statement::Explain {
            analyze,
            statement,
            format,
            ..
        } => {
            state.push_str("EXPLAIN ");
            if *analyze {
                state.push_str("ANALYZE ");
            }
            if let Some(format) = format {
                state.push_str("FORMAT = ");
                state.push_str(&format.to_string());
                state.push(' ');
            }
            emit_statement(state, statement)
        }
        other => {
            let kind = statement_kind(other);
            warn!(kind, "unhandled statement kind; emitting canonical text");
            MetricsRegistry::global().record_unhandled_node(kind);
            state.push_str(&other.to_string());
            Ok(())
        }
    }
}

fn emit_query(state: &mut TemplateState, query: &Query) -> Result<()> {
    emit_set_expr(state, &query.body)?;
    if let Some(order_by) = &query.order_by {
        if !order_by.exprs.is_empty() {
            state.push_str(" ORDER BY ");
            for (idx, item) in order_by.exprs.iter().enumerate() {
                if idx > 0 {
                    state.push_str(", ");
                }
                emit_order_by_expr(state, item)?;
            }
        }
    }
    emit_limit(state, query.limit.as_ref(), query.offset.as_ref())
}

fn emit_set_expr(state: &mut TemplateState, body: &SetExpr) -> Result<()> {
    match body {
        SetExpr::Select(select) => emit_select(state, select),
        SetExpr::Query(query) => {
            state.push('(');
            emit_query(state, query)?;
            state.push(')');
            Ok(())
        }
        SetExpr::Values(values) => emit_values_rows(state, values),
        other => {
            debug!("unhandled query body; emitting canonical text");
            MetricsRegistry::global().record_unhandled_node("set-expr");
            state.push_str(&other.to_string());
            Ok(())
        }
    }
}

fn emit_select(state: &mut TemplateState, select: &Select) -> Result<()> {
    state.push_str("SELECT ");
    if select.distinct.is_some() {
        state.push_str("DISTINCT ");
    }

    for (idx, item) in select.projection.iter().enumerate() {
        if idx > 0 {
            state.push_str(", ");
        }
        match item {
            SelectItem::Wildcard(_) => state.push('*'),
            SelectItem::QualifiedWildcard(name, _) => {
                emit_object_name(state, name);
                state.push_str(".*");
            }
            SelectItem::UnnamedExpr(expr) => emit_expr(state, expr)?,
            SelectItem::ExprWithAlias { expr, alias } => {
                emit_expr(state, expr)?;
                state.push_str(" AS ");
                state.push_str(&alias.value);
            }
        }
    }

    if !select.from.is_empty() {
        state.push_str(" FROM ");
        for (idx, table) in select.from.iter().enumerate() {
            // comma-joined FROM lists canonicalise like bare joins
            if idx > 0 {
                state.push_str(" CROSS JOIN ");
            }
            emit_table_with_joins(state, table)?;
        }
    }

    if let Some(selection) = &select.selection {
        state.push_str(" WHERE ");
        emit_expr(state, selection)?;
    }

    if let GroupByExpr::Expressions(exprs, _) = &select.group_by {
        if !exprs.is_empty() {
            state.push_str(" GROUP BY ");
            for (idx, expr) in exprs.iter().enumerate() {
                if idx > 0 {
                    state.push_str(", ");
                }
                emit_expr(state, expr)?;
            }
        }
    }

    if let Some(having) = &select.having {
        state.push_str(" HAVING ");
        emit_expr(state, having)?;
    }

    Ok(())
}

fn emit_insert(state: &mut TemplateState, insert: &Insert) -> Result<()> {
    state.push_str("INSERT ");
    if insert.ignore {
        state.push_str("IGNORE ");
    }
    state.push_str("INTO ");
    state.push_table(table_ref_of(&insert.table_name));
    emit_object_name(state, &insert.table_name);

    if !insert.columns.is_empty() {
        state.push_str(" (");
        for (idx, column) in insert.columns.iter().enumerate() {
            if idx > 0 {
                state.push_str(", ");
            }
            state.push_str(&column.value);
        }
        state.push(')');
    }

    if let Some(source) = &insert.source {
        state.push(' ');
        match source.body.as_ref() {
            SetExpr::Values(values) => emit_values_rows(state, values)?,
            // INSERT ... SELECT
            _ => emit_query(state, source)?,
        }
    }

    if let Some(OnInsert::DuplicateKeyUpdate(assignments)) = &insert.on {
        state.push_str(" ON DUPLICATE KEY UPDATE ");
        for (idx, assignment) in assignments.iter().enumerate() {
            if idx > 0 {
                state.push_str(", ");
            }
            emit_assignment(state, assignment)?;
        }
    }

    Ok(())
}

fn emit_values_rows(state: &mut TemplateState, values: &Values) -> Result<()> {
    state.push_str("VALUES ");
    for (idx, row) in values.rows.iter().enumerate() {
        if idx > 0 {
            state.push_str(", ");
        }
        state.push('(');
        for (jdx, item) in row.iter().enumerate() {
            if jdx > 0 {
                state.push_str(", ");
            }
            emit_expr(state, item)?;
        }
        state.push(')');
    }
    Ok(())
}

fn emit_update(
    state: &mut TemplateState,
    table: &TableWithJoins,
    assignments: &[Assignment],
    selection: Option<&Expr>,
) -> Result<()> {
    state.push_str("UPDATE ");
    emit_table_with_joins(state, table)?;

    state.push_str(" SET ");
    for (idx, assignment) in assignments.iter().enumerate() {
        if idx > 0 {
            state.push_str(", ");
        }
        emit_assignment(state, assignment)?;
    }

    if let Some(selection) = selection {
        state.push_str(" WHERE ");
        emit_expr(state, selection)?;
    }
    Ok(())
}

fn emit_delete(state: &mut TemplateState, delete: &Delete) -> Result<()> {
    state.push_str("DELETE ");

    if !delete.tables.is_empty() {
        for (idx, name) in delete.tables.iter().enumerate() {
            if idx > 0 {
                state.push_str(", ");
            }
            state.push_table(table_ref_of(name));
            emit_object_name(state, name);
        }
        state.push(' ');
    }
    state.push_str("FROM ");

    let relations = match &delete.from {
        FromTable::WithFromKeyword(tables) | FromTable::WithoutKeyword(tables) => tables,
    };
    for (idx, table) in relations.iter().enumerate() {
        // comma-joined FROM lists canonicalise like bare joins
        if idx > 0 {
            state.push_str(" CROSS JOIN ");
        }
        emit_table_with_joins(state, table)?;
    }

    if let Some(selection) = &delete.selection {
        state.push_str(" WHERE ");
        emit_expr(state, selection)?;
    }

    if !delete.order_by.is_empty() {
        state.push_str(" ORDER BY ");
        for (idx, item) in delete.order_by.iter().enumerate() {
            if idx > 0 {
                state.push_str(", ");
            }
            emit_order_by_expr(state, item)?;
        }
    }

    emit_limit(state, delete.limit.as_ref(), None)
}

fn emit_assignment(state: &mut TemplateState, assignment: &Assignment) -> Result<()> {
    match &assignment.target {
        AssignmentTarget::ColumnName(name) => emit_object_name(state, name),
        AssignmentTarget::Tuple(names) => {
            state.push('(');
            for (idx, name) in names.iter().enumerate() {
                if idx > 0 {
                    state.push_str(", ");
                }
                emit_object_name(state, name);
            }
            state.push(')');
        }
    }
    // symbolic operator name, not `=`: assignments fingerprint the same
    // way binary comparisons do
    state.push_str(" eq ");
    emit_expr(state, &assignment.value)
}

fn emit_table_with_joins(state: &mut TemplateState, table: &TableWithJoins) -> Result<()> {
    emit_table_factor(state, &table.relation)?;
    for join in &table.joins {
        emit_join(state, join)?;
    }
    Ok(())
}

fn emit_table_factor(state: &mut TemplateState, factor: &TableFactor) -> Result<()> {
    match factor {
        TableFactor::Table { name, alias, .. } => {
            state.push_table(table_ref_of(name));
            emit_object_name(state, name);
            emit_alias(state, alias.as_ref());
        }
        TableFactor::Derived {
            subquery, alias, ..
        } => {
            state.push('(');
            emit_query(state, subquery)?;
            state.push(')');
            emit_alias(state, alias.as_ref());
        }
        TableFactor::NestedJoin {
            table_with_joins,
            alias,
        } => {
            state.push('(');
            emit_table_with_joins(state, table_with_joins)?;
            state.push(')');
            emit_alias(state, alias.as_ref());
        }
        other => {
            debug!("unhandled table factor; emitting canonical text");
            MetricsRegistry::global().record_unhandled_node("table-factor");
            state.push_str(&other.to_string());
        }
    }
    Ok(())
}

fn emit_alias(state: &mut TemplateState, alias: Option<&TableAlias>) {
    if let Some(alias) = alias {
        state.push_str(" AS ");
        state.push_str(&alias.name.value);
    }
}

fn emit_join(state: &mut TemplateState, join: &Join) -> Result<()> {
    let (keyword, constraint) = match &join.join_operator {
        JoinOperator::LeftOuter(constraint) => (" LEFT JOIN ", Some(constraint)),
        JoinOperator::RightOuter(constraint) => (" RIGHT JOIN ", Some(constraint)),
        // bare/INNER joins render as CROSS JOIN, keeping the canonical
        // fingerprint shape inner joins have always produced here
        JoinOperator::Inner(constraint) => (" CROSS JOIN ", Some(constraint)),
        JoinOperator::CrossJoin => (" CROSS JOIN ", None),
        other => (" JOIN ", join_constraint_of(other)),
    };

    state.push_str(keyword);
    emit_table_factor(state, &join.relation)?;

    match constraint {
        Some(JoinConstraint::On(expr)) => {
            state.push_str(" ON ");
            emit_expr(state, expr)?;
        }
        Some(JoinConstraint::Using(columns)) => {
            state.push_str(" USING (");
            for (idx, column) in columns.iter().enumerate() {
                if idx > 0 {
                    state.push_str(", ");
                }
                state.push_str(&column.value);
            }
            state.push(')');
        }
        _ => {}
    }
    Ok(())
}

fn join_constraint_of(operator: &JoinOperator) -> Option<&JoinConstraint> {
    match operator {
        JoinOperator::FullOuter(constraint)
        | JoinOperator::LeftSemi(constraint)
        | JoinOperator::RightSemi(constraint)
        | JoinOperator::LeftAnti(constraint)
        | JoinOperator::RightAnti(constraint) => Some(constraint),
        _ => None,
    }
}

fn emit_order_by_expr(state: &mut TemplateState, item: &OrderByExpr) -> Result<()> {
    emit_expr(state, &item.expr)?;
    if item.asc == Some(false) {
        state.push_str(" DESC");
    }
    Ok(())
}

fn emit_limit(
    state: &mut TemplateState,
    limit: Option<&Expr>,
    offset: Option<&Offset>,
) -> Result<()> {
    let Some(count) = limit else {
        return Ok(());
    };
    state.push_str(" LIMIT ");
    if let Some(offset) = offset {
        emit_expr(state, &offset.value)?;
        state.push_str(", ");
    }
    emit_expr(state, count)
}

fn emit_expr(state: &mut TemplateState, expr: &Expr) -> Result<()> {
    match expr {
        Expr::Identifier(ident) => {
            state.push_str(&ident.value);
            Ok(())
        }
        Expr::CompoundIdentifier(idents) => {
            for (idx, ident) in idents.iter().enumerate() {
                if idx > 0 {
                    state.push('.');
                }
                state.push_str(&ident.value);
            }
            Ok(())
        }
        Expr::Value(value) => emit_value(state, value),
        Expr::TypedString { data_type, value } => {
            if state.in_aggregate() {
                state.push_str(&format!("{data_type} '{value}'"));
            } else {
                state.push('?');
                state.push_param(Value::DateTime(value.clone()));
            }
            Ok(())
        }
        Expr::BinaryOp { left, op, right } => {
            emit_expr(state, left)?;
            state.push(' ');
            state.push_str(&binary_op_name(op));
            state.push(' ');
            emit_expr(state, right)
        }
        Expr::UnaryOp { op, expr } => {
            state.push_str(&unary_op_name(op));
            state.push(' ');
            emit_expr(state, expr)
        }
        Expr::Nested(inner) => {
            state.push('(');
            emit_expr(state, inner)?;
            state.push(')');
            Ok(())
        }
        Expr::Tuple(items) => {
            state.push('(');
            for (idx, item) in items.iter().enumerate() {
                if idx > 0 {
                    state.push_str(", ");
                }
                emit_expr(state, item)?;
            }
            state.push(')');
            Ok(())
        }
        Expr::InList {
            expr,
            list,
            negated,
        } => {
            emit_expr(state, expr)?;
            if *negated {
                state.push_str(" NOT");
            }
            state.push_str(" IN (");
            for (idx, item) in list.iter().enumerate() {
                if idx > 0 {
                    state.push_str(", ");
                }
                emit_expr(state, item)?;
            }
            state.push(')');
            Ok(())
        }
        Expr::InSubquery {
            expr,
            subquery,
            negated,
        } => {
            emit_expr(state, expr)?;
            if *negated {
                state.push_str(" NOT");
            }
            state.push_str(" IN (");
            emit_query(state, subquery)?;
            state.push(')');
            Ok(())
        }
        // ESCAPE clauses are dropped from the template; known limitation
        Expr::Like {
            negated,
            expr,
            pattern,
            ..
        }
        | Expr::ILike {
            negated,
            expr,
            pattern,
            ..
        } => {
            emit_expr(state, expr)?;
            if *negated {
                state.push_str(" NOT");
            }
            state.push_str(" LIKE ");
            emit_expr(state, pattern)
        }
        Expr::Between {
            expr,
            negated,
            low,
            high,
        } => {
            emit_expr(state, expr)?;
            if *negated {
                state.push_str(" NOT");
            }
            state.push_str(" BETWEEN ");
            emit_expr(state, low)?;
            state.push_str(" AND ");
            emit_expr(state, high)
        }
        Expr::IsNull(inner) => {
            emit_expr(state, inner)?;
            state.push_str(" IS NULL");
            Ok(())
        }
        Expr::IsNotNull(inner) => {
            emit_expr(state, inner)?;
            state.push_str(" IS NOT NULL");
            Ok(())
        }
        Expr::Exists { subquery, negated } => {
            if *negated {
                state.push_str("NOT ");
            }
            state.push_str("EXISTS (");
            emit_query(state, subquery)?;
            state.push(')');
            Ok(())
        }
        Expr::Subquery(query) => {
            // parent already opened a parenthesis: emit bare
            if state.buffer_ends_with('(') {
                emit_query(state, query)
            } else {
                state.push('(');
                emit_query(state, query)?;
                state.push(')');
                Ok(())
            }
        }
        Expr::Case {
            operand,
            conditions,
            results,
            else_result,
        } => {
            state.push_str("CASE");
            if let Some(operand) = operand {
                state.push(' ');
                emit_expr(state, operand)?;
            }
            for (condition, result) in conditions.iter().zip(results) {
                state.push_str(" WHEN ");
                emit_expr(state, condition)?;
                state.push_str(" THEN ");
                emit_expr(state, result)?;
            }
            if let Some(else_result) = else_result {
                state.push_str(" ELSE ");
                emit_expr(state, else_result)?;
            }
            state.push_str(" END");
            Ok(())
        }
        Expr::Cast {
            kind: CastKind::Cast,
            expr,
            data_type,
            ..
        } => {
            state.push_str("CAST(");
            emit_expr(state, expr)?;
            state.push_str(" AS ");
            state.push_str(&data_type.to_string());
            state.push(')');
            Ok(())
        }
        Expr::Interval(interval) => emit_interval(state, interval),
        Expr::Function(function) => emit_function(state, function),
        other => {
            debug!("unhandled expression node; emitting canonical text");
            MetricsRegistry::global().record_unhandled_node("expr");
            state.push_str(&other.to_string());
            Ok(())
        }
    }
}

/// `DATE_ADD(d, INTERVAL 1 DAY)` templatizes as `INTERVAL ? DAY`: the
/// interval quantity is a param, the unit stays part of the shape.
fn emit_interval(state: &mut TemplateState, interval: &Interval) -> Result<()> {
    state.push_str("INTERVAL ");
    emit_expr(state, &interval.value)?;
    if let Some(unit) = &interval.leading_field {
        state.push(' ');
        state.push_str(&unit.to_string());
    }
    Ok(())
}

fn emit_function(state: &mut TemplateState, function: &Function) -> Result<()> {
    let name = object_name_text(&function.name);
    if is_aggregate_name(&name) {
        return emit_aggregate(state, function, &name);
    }

    state.push_str(&name);
    state.push('(');
    emit_function_arguments(state, &function.args)?;
    state.push(')');
    Ok(())
}

fn emit_aggregate(state: &mut TemplateState, function: &Function, name: &str) -> Result<()> {
    state.push_str(name);
    state.push('(');
    state.enter_aggregate();
    let emitted = emit_function_arguments(state, &function.args);
    state.exit_aggregate();
    emitted?;
    state.push(')');
    Ok(())
}

fn emit_function_arguments(state: &mut TemplateState, args: &FunctionArguments) -> Result<()> {
    match args {
        FunctionArguments::None => Ok(()),
        FunctionArguments::Subquery(query) => emit_query(state, query),
        FunctionArguments::List(list) => emit_function_arg_list(state, list),
    }
}

fn emit_function_arg_list(state: &mut TemplateState, list: &FunctionArgumentList) -> Result<()> {
    if matches!(list.duplicate_treatment, Some(DuplicateTreatment::Distinct)) {
        state.push_str("DISTINCT ");
    }
    for (idx, arg) in list.args.iter().enumerate() {
        if idx > 0 {
            state.push_str(", ");
        }
        emit_function_arg(state, arg)?;
    }
    Ok(())
}

fn emit_function_arg(state: &mut TemplateState, arg: &FunctionArg) -> Result<()> {
    match arg {
        FunctionArg::Unnamed(FunctionArgExpr::Expr(expr)) => emit_expr(state, expr),
        FunctionArg::Unnamed(FunctionArgExpr::Wildcard) => {
            // COUNT(*) normalises to COUNT(1)
            if state.in_aggregate() {
                state.push('1');
            } else {
                state.push('*');
            }
            Ok(())
        }
        FunctionArg::Unnamed(FunctionArgExpr::QualifiedWildcard(name)) => {
            emit_object_name(state, name);
            state.push_str(".*");
            Ok(())
        }
        other => {
            debug!("unhandled function argument; emitting canonical text");
            MetricsRegistry::global().record_unhandled_node("function-arg");
            state.push_str(&other.to_string());
            Ok(())
        }
    }
}

fn emit_value(state: &mut TemplateState, value: &SqlValue) -> Result<()> {
    if state.in_aggregate() {
        return emit_value_inline(state, value);
    }
    let converted = convert_value(value)?;
    state.push('?');
    state.push_param(converted);
    Ok(())
}

/// Literal conversion used on the placeholder path.
///
/// Numeric classification: exponent notation parses as a float; other
/// fractional literals stay string-exact decimals; plain digit strings
/// try `i64`, then `u64`, then fall back to a string-exact decimal.
fn convert_value(value: &SqlValue) -> Result<Value> {
    Ok(match value {
        SqlValue::Number(text, _) => number_value(text),
        SqlValue::SingleQuotedString(text) | SqlValue::DoubleQuotedString(text) => {
            Value::Str(text.clone())
        }
        SqlValue::Boolean(flag) => Value::Int64(i64::from(*flag)),
        SqlValue::Null => Value::Null,
        SqlValue::HexStringLiteral(text) => Value::Hex(text.clone()),
        SqlValue::Placeholder(_) => {
            return Err(SqfError::Unsupported(
                "parameter marker in input SQL".to_string(),
            ))
        }
        other => Value::Str(other.to_string()),
    })
}

fn number_value(text: &str) -> Value {
    if text.contains(['e', 'E']) {
        if let Ok(float) = text.parse::<f64>() {
            return Value::Float64(float);
        }
    } else if text.contains('.') {
        return Value::Decimal(text.to_string());
    } else if let Ok(signed) = text.parse::<i64>() {
        return Value::Int64(signed);
    } else if let Ok(unsigned) = text.parse::<u64>() {
        return Value::UInt64(unsigned);
    }
    Value::Decimal(text.to_string())
}

/// Inline rendering inside aggregate arguments: values stay part of the
/// template instead of becoming params.
fn emit_value_inline(state: &mut TemplateState, value: &SqlValue) -> Result<()> {
    match value {
        SqlValue::Number(text, _) => {
            if text.contains(['e', 'E']) {
                if let Ok(float) = text.parse::<f64>() {
                    state.push_str(&format!("{float:.6}"));
                    return Ok(());
                }
            }
            state.push_str(text);
        }
        // embedded quotes are intentionally not escaped
        SqlValue::SingleQuotedString(text) | SqlValue::DoubleQuotedString(text) => {
            state.push('\'');
            state.push_str(text);
            state.push('\'');
        }
        SqlValue::Boolean(flag) => state.push_str(if *flag { "1" } else { "0" }),
        SqlValue::Null => state.push_str("NULL"),
        SqlValue::Placeholder(_) => {
            return Err(SqfError::Unsupported(
                "parameter marker in input SQL".to_string(),
            ))
        }
        other => state.push_str(&other.to_string()),
    }
    Ok(())
}

fn emit_object_name(state: &mut TemplateState, name: &ObjectName) {
    for (idx, part) in name.0.iter().enumerate() {
        if idx > 0 {
            state.push('.');
        }
        state.push_str(&part.value);
    }
}

fn object_name_text(name: &ObjectName) -> String {
    name.0
        .iter()
        .map(|part| part.value.as_str())
        .collect::<Vec<_>>()
        .join(".")
}

fn table_ref_of(name: &ObjectName) -> TableRef {
    let parts = &name.0;
    match parts.len() {
        0 => TableRef::new("", ""),
        1 => TableRef::new("", parts[0].value.as_str()),
        len => TableRef::new(parts[len - 2].value.as_str(), parts[len - 1].value.as_str()),
    }
}

fn is_aggregate_name(name: &str) -> bool {
    matches!(
        name.to_ascii_lowercase().as_str(),
        "count"
            | "sum"
            | "avg"
            | "min"
            | "max"
            | "group_concat"
            | "bit_and"
            | "bit_or"
            | "bit_xor"
            | "std"
            | "stddev"
            | "stddev_pop"
            | "stddev_samp"
            | "var_pop"
            | "var_samp"
            | "variance"
            | "json_arrayagg"
            | "json_objectagg"
    )
}

/// Lower-case symbolic operator names; templates fingerprint comparisons
/// as `eq`/`gt`/... rather than punctuation.
fn binary_op_name(op: &BinaryOperator) -> Cow<'static, str> {
    let name = match op {
        BinaryOperator::Eq => "eq",
        BinaryOperator::NotEq => "ne",
        BinaryOperator::Lt => "lt",
        BinaryOperator::LtEq => "le",
        BinaryOperator::Gt => "gt",
        BinaryOperator::GtEq => "ge",
        BinaryOperator::Spaceship => "nulleq",
        BinaryOperator::And => "and",
        BinaryOperator::Or => "or",
        BinaryOperator::Xor => "xor",
        BinaryOperator::Plus => "plus",
        BinaryOperator::Minus => "minus",
        BinaryOperator::Multiply => "mul",
        BinaryOperator::Divide => "div",
        BinaryOperator::Modulo => "mod",
        BinaryOperator::MyIntegerDivide => "intdiv",
        BinaryOperator::BitwiseAnd => "bitand",
        BinaryOperator::BitwiseOr => "bitor",
        BinaryOperator::BitwiseXor => "bitxor",
        BinaryOperator::PGBitwiseShiftLeft => "leftshift",
        BinaryOperator::PGBitwiseShiftRight => "rightshift",
        other => return Cow::Owned(other.to_string().to_lowercase()),
    };
    Cow::Borrowed(name)
}

fn unary_op_name(op: &UnaryOperator) -> Cow<'static, str> {
    let name = match op {
        UnaryOperator::Plus => "plus",
        UnaryOperator::Minus => "minus",
        UnaryOperator::Not => "not",
        other => return Cow::Owned(other.to_string().to_lowercase()),
    };
    Cow::Borrowed(name)
}

fn statement_kind(statement: &Statement) -> &'static str {
    match statement {
        Statement::Query(_) => "query",
        Statement::Insert(_) => "insert",
        Statement::Update { .. } => "update",
        Statement::Delete(_) => "delete",
        Statement::Explain { .. } => "explain",
        Statement::CreateTable(_) => "create-table",
        Statement::CreateIndex(_) => "create-index",
        Statement::AlterTable { .. } => "alter-table",
        Statement::Drop { .. } => "drop",
        Statement::Truncate { .. } => "truncate",
        Statement::StartTransaction { .. } => "start-transaction",
        Statement::Commit { .. } => "commit",
        Statement::Rollback { .. } => "rollback",
        Statement::SetVariable { .. } => "set-variable",
        Statement::ShowVariable { .. } => "show-variable",
        _ => "other",
    }
}
