use actix_web::{get, web::Html, Responder};
use utoipa_actix_web::service_config::ServiceConfig;

/// Return a welcome message
///
/// Return a static page with a welcome message.
#[utoipa::path(get, path = "/", tag = "general")]
#[get("/")]
async fn welcome() -> impl Responder {
    Html::new("<!DOCTYPE html>
<html lang=\"en\">
<head>
    <meta charset=\"UTF-8\">
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
    <title>Thin Lens Backend Server</title>
    <style>
        body {font-family: Arial, sans-serif;margin: 0;padding: 0;background-color: #f4f4f4;text-align: center;}
        .container {
            max-width: 800px;
            margin: 50px auto;
            padding: 20px;
            background: white;
            box-shadow: 0 0 10px rgba(0, 0, 0, 0.1);
            border-radius: 10px;
        }
        h1 {color: #333;}
        p {color: #666; font-size: 18px;}
        code {background: #eee; padding: 2px 4px; border-radius: 3px;}
        .link {
            display: inline-block;
            margin-top: 20px;
            padding: 10px 20px;
            background: #007BFF;
            color: white;
            text-decoration: none;
            border-radius: 5px;
            font-size: 18px;
        }
        .link:hover {background: #0056b3;}
    </style>
</head>
<body>
    <div class=\"container\">
        <h1>Thin Lens Imaging</h1>
        <p>Send focal length, object distance and object height (in cm) as JSON to <code>POST /calculate</code>
        and receive image distance, image height and the kind of the image.</p>
        <a class=\"link\" href=\"swagger-ui/\">View API Documentation</a>
    </div>
</body>
</html>")
}

pub fn config(cfg: &mut ServiceConfig<'_>) {
    cfg.service(welcome);
}
