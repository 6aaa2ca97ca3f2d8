//! Round-trip a nested Rust structure through the value tree.

use std::collections::BTreeMap;
use std::error::Error;

use ujson::{find, json, to_string_pretty, ToJson, Value};

#[derive(Debug, PartialEq)]
struct Employee {
    first_name: String,
    last_name: String,
    accumulated_bonus: f64,
    married: bool,
}

impl ToJson for Employee {
    fn to_json(&self) -> Value {
        json!({
            "first_name": self.first_name.as_str(),
            "last_name": self.last_name.as_str(),
            "accumulated_bonus": self.accumulated_bonus,
            "married": self.married,
        })
    }
}

impl Employee {
    fn from_value(mut value: Value) -> Result<Employee, Box<dyn Error>> {
        let object = value.take_object()?;
        let field = |key| find(&object, key).ok_or(format!("missing field '{key}'"));
        Ok(Employee {
            first_name: String::from_utf8(field("first_name")?.string_cast()?.to_vec())?,
            last_name: String::from_utf8(field("last_name")?.string_cast()?.to_vec())?,
            accumulated_bonus: field("accumulated_bonus")?.double_cast()?,
            married: field("married")?.bool_cast()?,
        })
    }
}

#[derive(Debug, PartialEq)]
struct Company {
    name: String,
    revenue: f64,
    employees: Vec<Employee>,
    branch_revenues: BTreeMap<String, f64>,
}

impl ToJson for Company {
    fn to_json(&self) -> Value {
        json!({
            "name": self.name.as_str(),
            "revenue": self.revenue,
            "employees": self.employees,
            "branch_revenues": self.branch_revenues,
        })
    }
}

impl Company {
    fn from_value(mut value: Value) -> Result<Company, Box<dyn Error>> {
        let mut object = value.take_object()?;

        let mut employees = Vec::new();
        for (key, member) in object.iter_mut() {
            if key == "employees" {
                for element in member.take_array()? {
                    employees.push(Employee::from_value(element)?);
                }
            }
        }

        let field = |key| find(&object, key).ok_or(format!("missing field '{key}'"));
        let mut branch_revenues = BTreeMap::new();
        for (key, member) in field("branch_revenues")?.object_cast()? {
            branch_revenues.insert(key.clone(), member.double_cast()?);
        }

        Ok(Company {
            name: String::from_utf8(field("name")?.string_cast()?.to_vec())?,
            revenue: field("revenue")?.double_cast()?,
            employees,
            branch_revenues,
        })
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let company = Company {
        name: "My Company".to_owned(),
        revenue: 3.12e6,
        employees: vec![
            Employee {
                first_name: "Michael".to_owned(),
                last_name: "Madsen".to_owned(),
                accumulated_bonus: 123.32,
                married: false,
            },
            Employee {
                first_name: "John".to_owned(),
                last_name: "Jensen".to_owned(),
                accumulated_bonus: 657.12,
                married: true,
            },
        ],
        branch_revenues: BTreeMap::from([
            ("Los Angeles".to_owned(), 1.06e6),
            ("San Diego".to_owned(), 2.06e6),
        ]),
    };

    let json = to_string_pretty(&company.to_json())?;
    println!("{json}");

    let parsed = Company::from_value(ujson::from_str(&json)?)?;
    assert_eq!(parsed, company);
    println!("round trip ok");
    Ok(())
}
