use std::borrow::Cow;
use std::fmt;

use super::errors::CustomerError;

// ============================================================================
// TypeScript Declarations
// ============================================================================
//
// Describes the JSON shape of the customer records for front-end code, and
// converts JVM-side class sources into the same kind of declaration.
// Member types are kept in their JVM spelling and mapped when rendered:
// scalars by name, `List<T>` as `T[]`, anything else kept as a named type.
// Getters (`getDisplayName()`) render as properties (`displayName`).
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Member name as declared, e.g. `firstName` or `getDisplayName()`.
    pub name: Cow<'static, str>,
    pub source_type: Cow<'static, str>,
    pub nullable: bool,
}

impl Field {
    pub fn property_name(&self) -> String {
        property_name(&self.name)
    }
}

const fn field(name: &'static str, source_type: &'static str) -> Field {
    Field {
        name: Cow::Borrowed(name),
        source_type: Cow::Borrowed(source_type),
        nullable: false,
    }
}

const fn nullable(name: &'static str, source_type: &'static str) -> Field {
    Field {
        name: Cow::Borrowed(name),
        source_type: Cow::Borrowed(source_type),
        nullable: true,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    /// Empty when the source had no class header.
    pub name: Cow<'static, str>,
    pub fields: Cow<'static, [Field]>,
}

const CUSTOMER_FIELDS: &[Field] = &[
    field("customerId", "String"),
    field("organizationId", "String"),
    nullable("customerType", "CustomerType"),
    nullable("firstName", "String"),
    nullable("lastName", "String"),
    nullable("email", "String"),
    field("version", "Long"),
    field("requiresValidation", "Boolean"),
    field("addresses", "List<Address>"),
    field("phoneNumbers", "List<String>"),
    // Customer::display_name
    field("getDisplayName()", "String"),
];

const ADDRESS_FIELDS: &[Field] = &[
    field("street", "String"),
    field("city", "String"),
    field("state", "String"),
    field("postalCode", "String"),
    field("country", "String"),
];

pub const CUSTOMER: TypeDeclaration = TypeDeclaration {
    name: Cow::Borrowed("Customer"),
    fields: Cow::Borrowed(CUSTOMER_FIELDS),
};
pub const ADDRESS: TypeDeclaration = TypeDeclaration {
    name: Cow::Borrowed("Address"),
    fields: Cow::Borrowed(ADDRESS_FIELDS),
};

fn scalar_type(source_type: &str) -> Option<&'static str> {
    let mapped = match source_type.to_ascii_lowercase().as_str() {
        "boolean" => "boolean",
        "string" | "char" => "string",
        "long" | "int" | "short" | "byte" | "float" | "double" => "number",
        _ => return None,
    };
    Some(mapped)
}

/// Map a JVM-side type spelling to its TypeScript counterpart.
///
/// Only the first generic argument is looked at, so `List<List<T>>` reads
/// as `List[]`.
pub fn typescript_type(source_type: &str) -> String {
    if let Some(mapped) = scalar_type(source_type) {
        return mapped.to_string();
    }

    if source_type.contains('<') && source_type.contains('>') {
        let element = source_type
            .split('<')
            .nth(1)
            .and_then(|rest| rest.split('>').next())
            .unwrap_or_default();
        return match scalar_type(element) {
            Some(mapped) => format!("{mapped}[]"),
            None => format!("{element}[]"),
        };
    }

    source_type.to_string()
}

/// Property name for a member: `getDisplayName()` becomes `displayName`,
/// anything not starting with `get` is kept as written.
pub fn property_name(member: &str) -> String {
    if !member.starts_with("get") {
        return member.to_string();
    }

    let stripped = member.replacen("get", "", 1).replacen("()", "", 1);
    let mut chars = stripped.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => stripped,
    }
}

fn is_access_modifier(word: &str) -> bool {
    word.contains("public") || word.contains("private") || word.contains("protected")
}

/// Parse a JVM-side class source into a declaration.
///
/// Only lines whose first word is an access modifier are read; everything
/// else (method bodies, closing braces, annotations) is skipped.
pub fn parse_class(source: &str) -> Result<TypeDeclaration, CustomerError> {
    if !source.contains('\n') {
        return Err(CustomerError::MissingLineBreak);
    }

    match source.split('\n').next() {
        Some(first_line) if first_line.contains("class") => {}
        _ => return Err(CustomerError::UndetectedDeclaration),
    }

    let mut name = String::new();
    let mut fields = Vec::new();

    for raw_line in source.split('\n') {
        let line = raw_line.trim().replacen(';', "", 1);
        let words: Vec<&str> = line.split_whitespace().collect();

        let Some(modifier) = words.first() else {
            continue;
        };
        if !is_access_modifier(modifier) {
            continue;
        }
        if words.len() < 3 {
            return Err(CustomerError::InvalidLine(line.trim().to_string()));
        }

        let (source_type, member) = (words[1], words[2]);
        if source_type == "class" {
            name = member.to_string();
            continue;
        }

        fields.push(Field {
            name: Cow::Owned(member.to_string()),
            source_type: Cow::Owned(source_type.to_string()),
            nullable: false,
        });
    }

    Ok(TypeDeclaration {
        name: Cow::Owned(name),
        fields: Cow::Owned(fields),
    })
}

/// Convert a JVM-side class source straight to TypeScript.
pub fn convert_class(source: &str) -> Result<String, CustomerError> {
    let declaration = parse_class(source)?;
    tracing::debug!(
        type_name = %declaration.name,
        fields = declaration.fields.len(),
        "Converted class declaration"
    );
    Ok(declaration.to_string())
}

impl fmt::Display for TypeDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.name.is_empty() {
            writeln!(f, "export type {} = {{", self.name)?;
        }
        for field in self.fields.iter() {
            let ts_type = typescript_type(&field.source_type);
            if field.nullable {
                writeln!(f, "  {}: {} | null;", field.property_name(), ts_type)?;
            } else {
                writeln!(f, "  {}: {};", field.property_name(), ts_type)?;
            }
        }
        write!(f, "}}")
    }
}

/// Every declaration the customer records need, `Address` first.
pub fn render_declarations() -> String {
    [ADDRESS, CUSTOMER]
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n\n")
}
