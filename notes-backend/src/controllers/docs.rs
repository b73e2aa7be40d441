//! API documentation — a static OpenAPI 3.0 description of the note routes,
//! rendered by Swagger UI at `/docs`.

use actix_web::{web, HttpResponse, Responder};
use serde_json::{json, Value};

/// Version from Cargo.toml, available at compile time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Swagger UI shell; assets come from the swagger-ui-dist CDN
const SWAGGER_UI_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>API Documentation</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/docs/openapi.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

fn note_name_param() -> Value {
    json!({
        "in": "path",
        "name": "noteName",
        "required": true,
        "schema": { "type": "string" },
        "description": "Name of the note"
    })
}

/// Build the OpenAPI document served at `/docs/openapi.json`
pub fn openapi_document() -> Value {
    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "API Documentation",
            "version": VERSION,
            "description": "API Documentation for note service"
        },
        "paths": {
            "/notes/{noteName}": {
                "get": {
                    "summary": "Get the content of a note",
                    "parameters": [note_name_param()],
                    "responses": {
                        "200": {
                            "description": "Successful response",
                            "content": { "text/plain": { "schema": { "type": "string" } } }
                        },
                        "404": { "description": "Note not found" }
                    }
                },
                "put": {
                    "summary": "Update the content of a note",
                    "parameters": [note_name_param()],
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": {
                                    "type": "object",
                                    "properties": {
                                        "text": {
                                            "type": "string",
                                            "description": "New content for the note"
                                        }
                                    }
                                }
                            }
                        }
                    },
                    "responses": {
                        "200": { "description": "Note updated successfully" },
                        "400": { "description": "Bad request (missing text)" },
                        "404": { "description": "Note not found" }
                    }
                },
                "delete": {
                    "summary": "Delete a note",
                    "parameters": [note_name_param()],
                    "responses": {
                        "200": { "description": "Note deleted successfully" },
                        "404": { "description": "Note not found" }
                    }
                }
            },
            "/notes": {
                "get": {
                    "summary": "Get all notes",
                    "responses": {
                        "200": {
                            "description": "List of notes",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "array",
                                        "items": {
                                            "type": "object",
                                            "properties": {
                                                "name": { "type": "string", "description": "Note name" },
                                                "text": { "type": "string", "description": "Note content" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "/write": {
                "post": {
                    "summary": "Create a new note",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/x-www-form-urlencoded": {
                                "schema": {
                                    "type": "object",
                                    "properties": {
                                        "note_name": { "type": "string", "description": "Name of the new note" },
                                        "note": { "type": "string", "description": "Content of the new note" }
                                    }
                                }
                            }
                        }
                    },
                    "responses": {
                        "201": { "description": "Note created successfully" },
                        "400": { "description": "Note already exists" },
                        "500": { "description": "Error creating note" }
                    }
                }
            },
            "/UploadForm.html": {
                "get": {
                    "summary": "Serve the upload form HTML file",
                    "responses": {
                        "200": {
                            "description": "HTML form retrieved successfully",
                            "content": { "text/html": { "schema": { "type": "string" } } }
                        },
                        "404": { "description": "HTML file not found" }
                    }
                }
            }
        }
    })
}

async fn get_openapi() -> impl Responder {
    HttpResponse::Ok().json(openapi_document())
}

async fn get_docs_page() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(SWAGGER_UI_PAGE)
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/docs").route(web::get().to(get_docs_page)))
        .service(web::resource("/docs/openapi.json").route(web::get().to(get_openapi)));
}
